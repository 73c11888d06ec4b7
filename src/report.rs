use crate::session::SessionResult;

pub const MIN_COLUMN_WIDTH: usize = 12;
pub const HEADERS: [&str; 6] = ["Operation", "Level", "Correct", "Incorrect", "Total", "Time"];
pub const WIN_MESSAGE: &str = "CONGRATULATIONS! YOU WIN.";

fn row_values(result: &SessionResult) -> [String; 6] {
    [
        result.operation().to_string(),
        result.level().to_string(),
        result.num_correct().to_string(),
        result.num_incorrect().to_string(),
        result.num_questions().to_string(),
        format!("{:.2}", result.elapsed_seconds()),
    ]
}

/// Header and data row, each cell left-justified to the wider of
/// header and value (at least `MIN_COLUMN_WIDTH`).
pub fn render_table(result: &SessionResult) -> String {
    let values = row_values(result);
    let widths: Vec<usize> = HEADERS
        .iter()
        .zip(values.iter())
        .map(|(h, v)| MIN_COLUMN_WIDTH.max(h.len()).max(v.chars().count()))
        .collect();

    let join = |cells: Vec<String>| cells.join(" | ");
    let header = join(
        HEADERS
            .iter()
            .zip(&widths)
            .map(|(h, &w)| format!("{h:<w$}"))
            .collect(),
    );
    let row = join(
        values
            .iter()
            .zip(&widths)
            .map(|(v, &w)| format!("{v:<w$}"))
            .collect(),
    );
    format!("{header}\n{row}")
}

/// Win banner for a perfect score.
pub fn verdict(result: &SessionResult) -> Option<&'static str> {
    result.is_perfect().then_some(WIN_MESSAGE)
}

/// Full results block as printed at the end of a game.
pub fn render(result: &SessionResult) -> String {
    let mut out = format!("\n\t\tHIGHSCORES\n{}\n", render_table(result));
    if let Some(msg) = verdict(result) {
        out.push_str(&format!("\n\t\t{msg}\n"));
    }
    out
}

pub fn to_json(result: &SessionResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
