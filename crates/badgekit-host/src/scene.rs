//! View-tree capabilities and the in-memory reference host.
//!
//! Widgets never talk to a UI framework directly. They talk to two
//! capability traits:
//!
//! - [`ViewOps`]: per-view operations — visibility, layout parameters,
//!   background, text, alpha, starting a fade
//! - [`ContainerOps`]: tree operations — creating views, enumerating and
//!   re-parenting children
//!
//! A host that cannot hold children under a given view reports so through
//! [`ContainerOps::supports_children`]; callers check the capability
//! instead of downcasting.
//!
//! [`Scene`] is an in-memory implementation of both traits. It serves as
//! the test double for widget code and as a reference for adapting a real
//! framework. Views are slotmap-keyed nodes; operations on stale handles
//! return [`HostError::UnknownView`] rather than panicking.
//!
//! # Example
//!
//! ```
//! use badgekit_host::{ContainerOps, Scene, ViewOps};
//!
//! let mut scene = Scene::new();
//! let root = scene.create_container();
//! let child = scene.create_view();
//! scene.add_child(root, child).unwrap();
//! assert_eq!(scene.child_count(root).unwrap(), 1);
//! ```

use std::time::Duration;

use slotmap::SlotMap;

use crate::animation::FadeAnimation;
use crate::error::{HostError, HostResult};
use crate::layout::{LayoutParams, Margins};
use crate::metrics::DisplayMetrics;
use crate::types::{Background, Color};

slotmap::new_key_type! {
    /// Handle identifying a view within a host.
    pub struct ViewId;
}

/// Text presentation attributes for a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in device pixels.
    pub size_px: f32,
    /// Whether the text is rendered bold.
    pub bold: bool,
    /// Text color.
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size_px: 14.0,
            bold: false,
            color: Color::BLACK,
        }
    }
}

/// Per-view operations a host must provide.
pub trait ViewOps {
    /// Device metrics for unit conversion.
    fn metrics(&self) -> DisplayMetrics;

    /// Parent of the view, if any.
    fn parent(&self, view: ViewId) -> HostResult<Option<ViewId>>;

    /// Whether the view is visible.
    fn is_visible(&self, view: ViewId) -> HostResult<bool>;

    /// Show or hide the view.
    fn set_visible(&mut self, view: ViewId, visible: bool) -> HostResult<()>;

    /// Current alpha of the view (driven by fades).
    fn alpha(&self, view: ViewId) -> HostResult<f32>;

    /// Set the view's alpha directly, cancelling any fade in flight.
    fn set_alpha(&mut self, view: ViewId, alpha: f32) -> HostResult<()>;

    /// Placement parameters the view's container consumes.
    fn layout_params(&self, view: ViewId) -> HostResult<LayoutParams>;

    /// Replace the view's placement parameters.
    fn set_layout_params(&mut self, view: ViewId, params: LayoutParams) -> HostResult<()>;

    /// The view's backdrop, if any.
    fn background(&self, view: ViewId) -> HostResult<Option<Background>>;

    /// Replace the view's backdrop.
    fn set_background(&mut self, view: ViewId, background: Option<Background>) -> HostResult<()>;

    /// Inner padding between the view's edges and its content.
    fn padding(&self, view: ViewId) -> HostResult<Margins>;

    /// Replace the view's inner padding.
    fn set_padding(&mut self, view: ViewId, padding: Margins) -> HostResult<()>;

    /// Text displayed by the view.
    fn text(&self, view: ViewId) -> HostResult<String>;

    /// Replace the view's text.
    fn set_text(&mut self, view: ViewId, text: &str) -> HostResult<()>;

    /// Text presentation attributes.
    fn text_style(&self, view: ViewId) -> HostResult<TextStyle>;

    /// Replace the text presentation attributes.
    fn set_text_style(&mut self, view: ViewId, style: TextStyle) -> HostResult<()>;

    /// Begin a fade on the view. Fire-and-forget: the call never blocks;
    /// the host advances the fade on subsequent frames. A fade already
    /// running on the view is replaced.
    fn start_animation(&mut self, view: ViewId, animation: FadeAnimation) -> HostResult<()>;
}

/// Tree operations a host must provide.
pub trait ContainerOps: ViewOps {
    /// Create a leaf view (e.g. a text label). The view starts parentless.
    fn create_view(&mut self) -> ViewId;

    /// Create a view that can hold children. The view starts parentless.
    fn create_container(&mut self) -> ViewId;

    /// Whether the view can hold children.
    fn supports_children(&self, view: ViewId) -> HostResult<bool>;

    /// Number of children under the view.
    fn child_count(&self, view: ViewId) -> HostResult<usize>;

    /// Child at the given index, or `None` if out of range.
    fn child_at(&self, view: ViewId, index: usize) -> HostResult<Option<ViewId>>;

    /// Position of `child` under `parent`, or `None` if not a child.
    fn index_of_child(&self, parent: ViewId, child: ViewId) -> HostResult<Option<usize>>;

    /// Insert `child` under `parent` at `index` (clamped to the child
    /// count). A child already held elsewhere is detached first.
    fn insert_child(&mut self, parent: ViewId, index: usize, child: ViewId) -> HostResult<()>;

    /// Append `child` under `parent`.
    fn add_child(&mut self, parent: ViewId, child: ViewId) -> HostResult<()> {
        let index = self.child_count(parent)?;
        self.insert_child(parent, index, child)
    }

    /// Detach `child` from `parent` without destroying it.
    fn remove_child(&mut self, parent: ViewId, child: ViewId) -> HostResult<()>;
}

/// Whether a node can hold children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Leaf,
    Container,
}

/// A fade in flight on a view.
#[derive(Debug, Clone, Copy)]
struct RunningFade {
    spec: FadeAnimation,
    elapsed: Duration,
}

#[derive(Debug, Clone)]
struct ViewNode {
    kind: NodeKind,
    parent: Option<ViewId>,
    children: Vec<ViewId>,
    visible: bool,
    alpha: f32,
    layout: LayoutParams,
    background: Option<Background>,
    padding: Margins,
    text: String,
    text_style: TextStyle,
    fade: Option<RunningFade>,
}

impl ViewNode {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            visible: true,
            alpha: 1.0,
            layout: LayoutParams::default(),
            background: None,
            padding: Margins::default(),
            text: String::new(),
            text_style: TextStyle::default(),
            fade: None,
        }
    }
}

/// An in-memory view tree implementing [`ViewOps`] and [`ContainerOps`].
///
/// All operations are synchronous and single-threaded, matching the
/// UI-thread-only model view-tree mutation requires. Fades started through
/// [`ViewOps::start_animation`] are stepped by [`Scene::advance`].
#[derive(Debug)]
pub struct Scene {
    nodes: SlotMap<ViewId, ViewNode>,
    metrics: DisplayMetrics,
}

impl Scene {
    /// Create an empty scene with identity display metrics.
    pub fn new() -> Self {
        Self::with_metrics(DisplayMetrics::default())
    }

    /// Create an empty scene with the given display metrics.
    pub fn with_metrics(metrics: DisplayMetrics) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            metrics,
        }
    }

    /// Number of live views.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene holds no views.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the handle refers to a live view.
    pub fn contains(&self, view: ViewId) -> bool {
        self.nodes.contains_key(view)
    }

    /// Destroy a view and its whole subtree, detaching it from its parent.
    pub fn remove_view(&mut self, view: ViewId) -> HostResult<()> {
        let parent = self.node(view)?.parent;
        if let Some(parent) = parent
            && let Some(parent_node) = self.nodes.get_mut(parent)
        {
            parent_node.children.retain(|&c| c != view);
        }

        let mut pending = vec![view];
        let mut destroyed = 0usize;
        while let Some(id) = pending.pop() {
            if let Some(node) = self.nodes.remove(id) {
                pending.extend(node.children);
                destroyed += 1;
            }
        }
        tracing::trace!(target: "badgekit_host::scene", ?view, destroyed, "destroyed view tree");
        Ok(())
    }

    /// Whether any view has a fade in flight.
    pub fn has_running_animations(&self) -> bool {
        self.nodes.values().any(|n| n.fade.is_some())
    }

    /// Step all running fades forward by `dt`, updating view alphas.
    ///
    /// Fades that reach their duration settle exactly at their end alpha
    /// and stop. Returns the number of fades still running.
    pub fn advance(&mut self, dt: Duration) -> usize {
        let mut running = 0;
        for node in self.nodes.values_mut() {
            let Some(fade) = node.fade.as_mut() else {
                continue;
            };
            fade.elapsed += dt;
            let progress = fade.spec.progress_at(fade.elapsed);
            if progress >= 1.0 {
                node.alpha = fade.spec.to_alpha;
                node.fade = None;
            } else {
                node.alpha = fade.spec.alpha_at(progress);
                running += 1;
            }
        }
        running
    }

    fn node(&self, view: ViewId) -> HostResult<&ViewNode> {
        self.nodes.get(view).ok_or(HostError::UnknownView(view))
    }

    fn node_mut(&mut self, view: ViewId) -> HostResult<&mut ViewNode> {
        self.nodes.get_mut(view).ok_or(HostError::UnknownView(view))
    }

    fn container(&self, view: ViewId) -> HostResult<&ViewNode> {
        let node = self.node(view)?;
        if node.kind != NodeKind::Container {
            return Err(HostError::NotAContainer(view));
        }
        Ok(node)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewOps for Scene {
    fn metrics(&self) -> DisplayMetrics {
        self.metrics
    }

    fn parent(&self, view: ViewId) -> HostResult<Option<ViewId>> {
        Ok(self.node(view)?.parent)
    }

    fn is_visible(&self, view: ViewId) -> HostResult<bool> {
        Ok(self.node(view)?.visible)
    }

    fn set_visible(&mut self, view: ViewId, visible: bool) -> HostResult<()> {
        self.node_mut(view)?.visible = visible;
        Ok(())
    }

    fn alpha(&self, view: ViewId) -> HostResult<f32> {
        Ok(self.node(view)?.alpha)
    }

    fn set_alpha(&mut self, view: ViewId, alpha: f32) -> HostResult<()> {
        let node = self.node_mut(view)?;
        node.alpha = alpha;
        node.fade = None;
        Ok(())
    }

    fn layout_params(&self, view: ViewId) -> HostResult<LayoutParams> {
        Ok(self.node(view)?.layout)
    }

    fn set_layout_params(&mut self, view: ViewId, params: LayoutParams) -> HostResult<()> {
        self.node_mut(view)?.layout = params;
        Ok(())
    }

    fn background(&self, view: ViewId) -> HostResult<Option<Background>> {
        Ok(self.node(view)?.background)
    }

    fn set_background(&mut self, view: ViewId, background: Option<Background>) -> HostResult<()> {
        self.node_mut(view)?.background = background;
        Ok(())
    }

    fn padding(&self, view: ViewId) -> HostResult<Margins> {
        Ok(self.node(view)?.padding)
    }

    fn set_padding(&mut self, view: ViewId, padding: Margins) -> HostResult<()> {
        self.node_mut(view)?.padding = padding;
        Ok(())
    }

    fn text(&self, view: ViewId) -> HostResult<String> {
        Ok(self.node(view)?.text.clone())
    }

    fn set_text(&mut self, view: ViewId, text: &str) -> HostResult<()> {
        let node = self.node_mut(view)?;
        node.text.clear();
        node.text.push_str(text);
        Ok(())
    }

    fn text_style(&self, view: ViewId) -> HostResult<TextStyle> {
        Ok(self.node(view)?.text_style)
    }

    fn set_text_style(&mut self, view: ViewId, style: TextStyle) -> HostResult<()> {
        self.node_mut(view)?.text_style = style;
        Ok(())
    }

    fn start_animation(&mut self, view: ViewId, animation: FadeAnimation) -> HostResult<()> {
        let node = self.node_mut(view)?;
        node.alpha = animation.from_alpha;
        node.fade = Some(RunningFade {
            spec: animation,
            elapsed: Duration::ZERO,
        });
        Ok(())
    }
}

impl ContainerOps for Scene {
    fn create_view(&mut self) -> ViewId {
        let id = self.nodes.insert(ViewNode::new(NodeKind::Leaf));
        tracing::trace!(target: "badgekit_host::scene", ?id, "created view");
        id
    }

    fn create_container(&mut self) -> ViewId {
        let id = self.nodes.insert(ViewNode::new(NodeKind::Container));
        tracing::trace!(target: "badgekit_host::scene", ?id, "created container");
        id
    }

    fn supports_children(&self, view: ViewId) -> HostResult<bool> {
        Ok(self.node(view)?.kind == NodeKind::Container)
    }

    fn child_count(&self, view: ViewId) -> HostResult<usize> {
        Ok(self.container(view)?.children.len())
    }

    fn child_at(&self, view: ViewId, index: usize) -> HostResult<Option<ViewId>> {
        Ok(self.container(view)?.children.get(index).copied())
    }

    fn index_of_child(&self, parent: ViewId, child: ViewId) -> HostResult<Option<usize>> {
        Ok(self.container(parent)?.children.iter().position(|&c| c == child))
    }

    fn insert_child(&mut self, parent: ViewId, index: usize, child: ViewId) -> HostResult<()> {
        self.container(parent)?;
        self.node(child)?;

        // Detach from any previous parent first.
        let old_parent = self.node(child)?.parent;
        if let Some(old_parent) = old_parent
            && let Some(old_node) = self.nodes.get_mut(old_parent)
        {
            old_node.children.retain(|&c| c != child);
        }

        let parent_node = self.node_mut(parent)?;
        let index = index.min(parent_node.children.len());
        parent_node.children.insert(index, child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn remove_child(&mut self, parent: ViewId, child: ViewId) -> HostResult<()> {
        let parent_node = self.container(parent)?;
        if !parent_node.children.contains(&child) {
            return Err(HostError::NotAChild { parent, child });
        }
        self.node_mut(parent)?.children.retain(|&c| c != child);
        self.node_mut(child)?.parent = None;
        Ok(())
    }
}
