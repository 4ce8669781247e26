//! Host attachment: wrapping a target view so the badge floats over it.
//!
//! Attachment mutates the host's view tree once: a transparent wrapper
//! container takes the target's place in its parent (carrying the target's
//! layout parameters), and both the target and the badge view move into
//! the wrapper. The badge starts hidden.
//!
//! The target's parent must be able to hold children. The capability is
//! checked explicitly through [`ContainerOps::supports_children`] and a
//! failing check is reported as [`AttachError::ParentNotContainer`] —
//! attachment never crashes on an unexpected parent shape.

use badgekit_host::{ContainerOps, ViewId};

use crate::badge::BadgeOverlay;
use crate::error::{AttachError, AttachResult};
use crate::style::DEFAULT_MARGIN_DIP;

impl BadgeOverlay {
    /// Attach the badge to `target`, inserting a wrapper container at the
    /// target's position in its parent.
    ///
    /// After a successful attach the wrapper holds the target and then the
    /// badge view, the wrapper carries the target's old layout parameters,
    /// and the badge is hidden until the first show.
    ///
    /// # Errors
    ///
    /// - [`AttachError::AlreadyAttached`] if the badge already wraps a
    ///   target
    /// - [`AttachError::NoParent`] if the target is not part of a tree
    /// - [`AttachError::ParentNotContainer`] if the target's parent cannot
    ///   hold children
    pub fn attach<H: ContainerOps>(&mut self, host: &mut H, target: ViewId) -> AttachResult<()> {
        if self.wrapper.is_some() {
            return Err(AttachError::AlreadyAttached);
        }

        let parent = host
            .parent(target)?
            .ok_or(AttachError::NoParent(target))?;
        if !host.supports_children(parent)? {
            return Err(AttachError::ParentNotContainer(parent));
        }
        let index = host
            .index_of_child(parent, target)?
            .ok_or(badgekit_host::HostError::NotAChild {
                parent,
                child: target,
            })?;

        self.refresh_metrics(host);

        // Swap the wrapper into the target's slot, carrying its params.
        let params = host.layout_params(target)?;
        let wrapper = host.create_container();
        host.remove_child(parent, target)?;
        host.insert_child(parent, index, wrapper)?;
        host.set_layout_params(wrapper, params)?;
        host.add_child(wrapper, target)?;

        let badge = self.ensure_view(host);
        host.set_visible(badge, false)?;
        host.add_child(wrapper, badge)?;

        self.wrapper = Some(wrapper);
        self.target = Some(target);
        self.shown = false;

        tracing::debug!(
            target: "badgekit::attach",
            target_view = ?target,
            ?wrapper,
            badge = ?badge,
            "attached badge to target view"
        );
        Ok(())
    }

    /// Attach the badge to the tab child at `index` of a tabbed container.
    ///
    /// Unlike [`attach`](Self::attach), the tab child is not re-parented:
    /// the wrapper is overlaid inside it.
    ///
    /// # Errors
    ///
    /// - [`AttachError::AlreadyAttached`] if the badge already wraps a
    ///   target
    /// - [`AttachError::TabIndexOutOfRange`] if `index` names no tab child
    /// - [`AttachError::ParentNotContainer`] if the resolved tab child
    ///   cannot hold children
    pub fn attach_to_tab<H: ContainerOps>(
        &mut self,
        host: &mut H,
        tab_container: ViewId,
        index: usize,
    ) -> AttachResult<()> {
        if self.wrapper.is_some() {
            return Err(AttachError::AlreadyAttached);
        }

        let len = host.child_count(tab_container)?;
        let tab = host
            .child_at(tab_container, index)?
            .ok_or(AttachError::TabIndexOutOfRange { index, len })?;
        if !host.supports_children(tab)? {
            return Err(AttachError::ParentNotContainer(tab));
        }

        self.refresh_metrics(host);

        let wrapper = host.create_container();
        host.add_child(tab, wrapper)?;

        let badge = self.ensure_view(host);
        host.set_visible(badge, false)?;
        host.add_child(wrapper, badge)?;

        self.wrapper = Some(wrapper);
        self.target = Some(tab);
        self.shown = false;

        tracing::debug!(
            target: "badgekit::attach",
            ?tab_container,
            index,
            ?tab,
            ?wrapper,
            "attached badge to tab child"
        );
        Ok(())
    }

    /// Adopt the host's display metrics, rescaling the default margins if
    /// they were never customized.
    fn refresh_metrics<H: ContainerOps>(&mut self, host: &H) {
        self.metrics = host.metrics();
        if !self.margins_customized {
            self.style.margin_h = self.metrics.dip_to_px(DEFAULT_MARGIN_DIP);
            self.style.margin_v = self.style.margin_h;
        }
    }
}
