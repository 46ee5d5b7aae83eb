use tilematch_engine::BoardObserver;

/// Collects board events as printable lines.
///
/// The engine calls observers while it still holds the board, so events are
/// buffered here and written out once the swap returns.
#[derive(Debug, Default)]
pub struct EventLog {
    lines: Vec<String>,
}

impl EventLog {
    /// Removes and returns the buffered lines.
    pub fn drain(&mut self) -> impl Iterator<Item = String> + '_ {
        self.lines.drain(..)
    }
}

impl BoardObserver for EventLog {
    fn on_tiles_cleared(&mut self, count: usize) {
        log::trace!("observed {count} cleared tiles");
        self.lines.push(format!("  * cleared {count} tiles"));
    }

    fn on_goal_reached(&mut self) {
        self.lines.push("  * goal reached!".to_owned());
    }
}
