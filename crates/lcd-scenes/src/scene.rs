use lcd_core::{AnimationError, FrameContext, Node};

/// A top-level piece of the video.
///
/// Implementors are immutable descriptions; rendering is a pure function of the
/// context, so the same frame can be evaluated from any thread in any order.
pub trait Scene: std::fmt::Debug + Send + Sync {
    /// Builds the visual tree for `ctx.frame`, which is local to the scene's segment.
    fn render(&self, ctx: &FrameContext) -> Result<Node, AnimationError>;
}
