/// Receives board events while a swap resolves.
///
/// Presentation collaborators implement this to play a sound when tiles clear
/// or to move on to the next level when the goal is reached. Both methods
/// default to doing nothing. Callbacks run synchronously inside
/// [`BoardEngine::try_swap_observed`](crate::BoardEngine::try_swap_observed),
/// after the board state for that event has been updated.
///
/// `()` is the observer that ignores every event.
///
/// # Examples
///
/// ```
/// use tilematch_engine::BoardObserver;
///
/// #[derive(Default)]
/// struct Chime {
///     plays: usize,
/// }
///
/// impl BoardObserver for Chime {
///     fn on_tiles_cleared(&mut self, _count: usize) {
///         self.plays += 1;
///     }
/// }
/// ```
pub trait BoardObserver {
    /// Called once per resolve round with the number of tiles cleared in it.
    fn on_tiles_cleared(&mut self, count: usize) {
        let _ = count;
    }

    /// Called once per board, the first time the score reaches the goal.
    fn on_goal_reached(&mut self) {}
}

impl BoardObserver for () {}

impl<O> BoardObserver for &mut O
where
    O: BoardObserver + ?Sized,
{
    fn on_tiles_cleared(&mut self, count: usize) {
        (**self).on_tiles_cleared(count);
    }

    fn on_goal_reached(&mut self) {
        (**self).on_goal_reached();
    }
}
