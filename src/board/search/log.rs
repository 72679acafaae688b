use crate::board::Move;

/// Summary of one finished search, as reported to a `SearchLogger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchInfo {
    pub depth: u32,
    pub score: i32,
    pub nodes: u64,
    pub time_ms: u128,
    pub best_move: Option<Move>,
}

/// Receives the summary of each search.
pub trait SearchLogger {
    fn info(&mut self, info: &SearchInfo);
}

/// Collects `info` lines for callers that assemble their own output.
impl SearchLogger for Vec<String> {
    fn info(&mut self, info: &SearchInfo) {
        self.push(format_info(info));
    }
}

/// Protocol `info` line for a search.
#[must_use]
pub fn format_info(info: &SearchInfo) -> String {
    let mv = info
        .best_move
        .map_or_else(|| "(none)".to_string(), |mv| mv.to_string());
    format!(
        "info depth {} score {} nodes {} time {} move {}",
        info.depth, info.score, info.nodes, info.time_ms, mv
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, Square};

    #[test]
    fn info_line_layout() {
        let info = SearchInfo {
            depth: 3,
            score: -20,
            nodes: 812,
            time_ms: 1,
            best_move: Some(Move::new(Piece::BlackKing, Square(1, 4))),
        };
        assert_eq!(
            format_info(&info),
            "info depth 3 score -20 nodes 812 time 1 move ke7"
        );

        let mut lines: Vec<String> = Vec::new();
        lines.info(&SearchInfo {
            best_move: None,
            ..info
        });
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("move (none)"));
    }
}
