use tilematch_engine::BoardEngine;

/// Draws the board with row and column labels, top row first.
///
/// ```text
/// 2 | D B C
/// 1 | B C D
/// 0 | B C D
///   +------
///     0 1 2
/// score 30/100
/// ```
#[must_use]
pub fn render(engine: &BoardEngine) -> String {
    let grid = engine.grid();
    let side = grid.side();
    let width = (side - 1).max(0).to_string().len();

    let mut lines: Vec<String> = (0..side)
        .rev()
        .zip(grid.to_string().lines())
        .map(|(row, line)| {
            let cells: Vec<String> = line.chars().map(String::from).collect();
            format!("{row:>width$} | {}", cells.join(" "))
        })
        .collect();
    lines.push(format!("{:width$} +{}", "", "-".repeat(grid.dimension() * 2)));
    // Columns past 9 are labeled by their last digit.
    let labels: Vec<String> = (0..side).map(|column| (column % 10).to_string()).collect();
    lines.push(format!("{:width$}   {}", "", labels.join(" ")));
    lines.push(format!("score {}/{}", engine.score(), engine.score_goal()));
    lines.join("\n")
}
