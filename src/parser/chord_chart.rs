//! Chord charts: nine fixed lines, one column triple per chord.
//!
//! ```text
//!   |  |  |
//! - 1  3
//! - 0  2
//! - 3  0
//! - 0  0
//! - 1  1
//! - 0  0
//!   |  |  |
//!   F  G  C
//! ```

use crate::error::{ElementKind, ElementParseError};
use crate::model::{Chord, ChordChart, Element, GUITAR_STRINGS};

use super::Parsed;

const CHART_LINES: usize = 9;
const PILLAR_HEADER: &str = "  |  |  |";
const STRING_PREFIX: &str = "- ";
const FIRST_LABEL_COL: usize = 2;
const LABEL_STRIDE: usize = 3;

pub(crate) const LABEL_FONT_PT: f64 = 12.0;
pub(crate) const POSITIONS_FONT_PT: f64 = 10.0;

pub(super) fn parse(lines: &[String]) -> Result<Parsed, ElementParseError> {
    let err = |reason: String| ElementParseError::new(ElementKind::ChordChart, reason);

    if lines.len() < CHART_LINES {
        return Err(err(format!(
            "improper number of input lines, want at least {CHART_LINES} have {}",
            lines.len()
        )));
    }
    for i in [0, 7] {
        if !lines[i].starts_with(PILLAR_HEADER) {
            return Err(err(format!("not a chord chart (line {})", i + 1)));
        }
    }
    for (i, line) in lines.iter().enumerate().take(7).skip(1) {
        if !line.starts_with(STRING_PREFIX) {
            return Err(err(format!("not a chord chart (line {})", i + 1)));
        }
    }

    let rows: Vec<Vec<char>> = lines[..CHART_LINES].iter().map(|l| l.chars().collect()).collect();
    let at = |row: usize, col: usize| rows[row].get(col).copied().unwrap_or(' ');
    let labels = &rows[8];

    let mut chords = Vec::new();
    let mut col = FIRST_LABEL_COL;
    while col < labels.len() {
        // an unlabelled column ends the chart
        if labels[col] == ' ' {
            break;
        }

        let mut name = labels[col].to_string();
        if at(8, col + 1) != ' ' {
            name.push(at(8, col + 1));
            if at(8, col + 2) != ' ' {
                name.push(at(8, col + 2));
            }
        }

        let positions: [String; GUITAR_STRINGS] = std::array::from_fn(|s| {
            let row = s + 1;
            let mut word = String::new();
            if at(row, col) != ' ' {
                word.push(at(row, col));
            }
            if at(row, col + 1) != ' ' {
                word.push(at(row, col + 1));
            }
            word
        });

        chords.push(Chord { name, positions });
        col += LABEL_STRIDE;
    }

    let chart = ChordChart {
        chords,
        label_font_pt: LABEL_FONT_PT,
        positions_font_pt: POSITIONS_FONT_PT,
    };
    Ok((Element::ChordChart(chart), CHART_LINES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chart_lines() -> Vec<String> {
        [
            "  |  |  |  |",
            "- 1  3  x  10",
            "- 0  2  3  12",
            "- 3  0  2  12",
            "- 0  0  0  11",
            "- 1  1  1  10",
            "- 0  0  x  10",
            "  |  |  |  |",
            "  F  G7 Am7B",
            "next line",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn reads_names_and_positions() {
        let (el, used) = parse(&chart_lines()).unwrap();
        assert_eq!(used, 9);
        let Element::ChordChart(chart) = el else { panic!("not a chord chart") };
        let names: Vec<&str> = chart.chords.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["F", "G7", "Am7", "B"]);
        assert_eq!(chart.chords[2].positions[0], "x");
        assert_eq!(chart.chords[3].positions[1], "12");
        assert_eq!(chart.chords[0].positions, ["1", "0", "3", "0", "1", "0"].map(String::from));
    }

    #[test]
    fn parsing_twice_gives_the_same_chords() {
        let lines = chart_lines();
        let (first, n1) = parse(&lines).unwrap();
        let (second, n2) = parse(&lines[..n1]).unwrap();
        assert_eq!(n1, n2);
        assert_eq!(first, second);
    }

    #[test]
    fn blank_label_ends_the_chart() {
        let mut lines = chart_lines();
        lines[8] = "  F     Am".to_string();
        let (el, _) = parse(&lines).unwrap();
        let Element::ChordChart(chart) = el else { panic!("not a chord chart") };
        assert_eq!(chart.chords.len(), 1);
    }

    #[test]
    fn rejects_wrong_shape_without_consuming() {
        let mut lines = chart_lines();
        lines[3] = "= 3  0".to_string();
        let e = parse(&lines).unwrap_err();
        assert_eq!(e.kind, ElementKind::ChordChart);
        assert!(e.reason.contains("line 4"));

        assert!(parse(&lines[..5]).is_err());
    }

    #[test]
    fn short_string_rows_leave_positions_blank() {
        let mut lines = chart_lines();
        lines[6] = "- 0".to_string();
        let (el, _) = parse(&lines).unwrap();
        let Element::ChordChart(chart) = el else { panic!("not a chord chart") };
        assert_eq!(chart.chords[1].positions[5], "");
    }
}
