//! CSV ingest — parse and validate draw files at the boundary.
//!
//! Column layout of the state lottery exports:
//! `game name, month, day, year, five main numbers, special, multiplier` —
//! the multiplier column is optional and ignored. The first row is a header.
//!
//! Everything the chart core relies on is enforced here: integer fields,
//! real calendar dates, and domain membership for all six balls. A row that
//! fails any check rejects the whole file with a row-numbered error.

use chrono::NaiveDate;
use csv::StringRecord;

use crate::data::provider::DataError;
use crate::domain::{BallDomain, DrawHistory, DrawRecord, GameConfig, MAIN_BALLS};

/// Columns before the first main number: game name, month, day, year.
const MAIN_OFFSET: usize = 4;
const SPECIAL_COLUMN: usize = MAIN_OFFSET + MAIN_BALLS;
const MIN_COLUMNS: usize = SPECIAL_COLUMN + 1;

/// Outcome of parsing one draw file.
#[derive(Debug)]
pub struct IngestReport {
    pub history: DrawHistory,
    pub rows: usize,
}

/// Parse a full CSV export into a date-sorted history.
pub fn parse_draw_csv(game: &GameConfig, body: &str) -> Result<IngestReport, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        // Row numbers are 1-based and include the header.
        let row_no = i + 2;
        let row = row.map_err(|e| DataError::MalformedRow {
            row: row_no,
            reason: e.to_string(),
        })?;
        records.push(parse_row(game, row_no, &row)?);
    }

    if records.is_empty() {
        return Err(DataError::EmptyFile {
            game: game.name.clone(),
        });
    }

    Ok(IngestReport {
        rows: records.len(),
        history: DrawHistory::new(records),
    })
}

fn parse_row(game: &GameConfig, row_no: usize, row: &StringRecord) -> Result<DrawRecord, DataError> {
    if row.len() < MIN_COLUMNS {
        return Err(DataError::MalformedRow {
            row: row_no,
            reason: format!("expected at least {MIN_COLUMNS} columns, got {}", row.len()),
        });
    }

    let month = int_field(row, 1, row_no, "month")?;
    let day = int_field(row, 2, row_no, "day")?;
    let year = int_field(row, 3, row_no, "year")?;
    let date = NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| {
        DataError::MalformedRow {
            row: row_no,
            reason: format!("impossible date {month}/{day}/{year}"),
        }
    })?;

    let mut main = [0u8; MAIN_BALLS];
    for (slot, ball) in main.iter_mut().enumerate() {
        *ball = ball_field(
            row,
            MAIN_OFFSET + slot,
            row_no,
            game.main_domain,
            "main number",
        )?;
    }
    let special = ball_field(row, SPECIAL_COLUMN, row_no, game.special_domain, "special number")?;

    Ok(DrawRecord {
        date,
        main,
        special,
    })
}

fn int_field(row: &StringRecord, index: usize, row_no: usize, what: &str) -> Result<u32, DataError> {
    let raw = row.get(index).unwrap_or("").trim();
    raw.parse().map_err(|_| DataError::MalformedRow {
        row: row_no,
        reason: format!("{what} is not an integer: '{raw}'"),
    })
}

fn ball_field(
    row: &StringRecord,
    index: usize,
    row_no: usize,
    domain: BallDomain,
    what: &str,
) -> Result<u8, DataError> {
    let value = int_field(row, index, row_no, what)?;
    let ball = u8::try_from(value).ok().filter(|&b| domain.contains(b));
    ball.ok_or_else(|| DataError::MalformedRow {
        row: row_no,
        reason: format!(
            "{what} {value} outside domain {}..={}",
            domain.min(),
            domain.max()
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Game Name,Month,Day,Year,Num1,Num2,Num3,Num4,Num5,Special,Multiplier\n";

    fn game() -> GameConfig {
        GameConfig::powerball()
    }

    #[test]
    fn parses_well_formed_file() {
        let body = format!(
            "{HEADER}Powerball,1,6,2024,5,12,33,44,69,26,2\nPowerball,1,3,2024,1,2,3,4,5,7,3\n"
        );
        let report = parse_draw_csv(&game(), &body).unwrap();
        assert_eq!(report.rows, 2);
        // Output is sorted by date even though the file is newest-first.
        let records = report.history.records();
        assert_eq!(records[0].main, [1, 2, 3, 4, 5]);
        assert_eq!(records[1].special, 26);
    }

    #[test]
    fn multiplier_column_is_optional() {
        let body = format!("{HEADER}Powerball,1,6,2024,5,12,33,44,69,26\n");
        let report = parse_draw_csv(&game(), &body).unwrap();
        assert_eq!(report.rows, 1);
    }

    #[test]
    fn rejects_non_integer_ball() {
        let body = format!("{HEADER}Powerball,1,6,2024,5,twelve,33,44,69,26,2\n");
        let err = parse_draw_csv(&game(), &body).unwrap_err();
        match err {
            DataError::MalformedRow { row, reason } => {
                assert_eq!(row, 2);
                assert!(reason.contains("twelve"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_out_of_domain_ball() {
        // 70 is outside Powerball's 1..=69 main domain.
        let body = format!("{HEADER}Powerball,1,6,2024,5,12,33,44,70,26,2\n");
        let err = parse_draw_csv(&game(), &body).unwrap_err();
        match err {
            DataError::MalformedRow { row, reason } => {
                assert_eq!(row, 2);
                assert!(reason.contains("70"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_impossible_date() {
        let body = format!("{HEADER}Powerball,2,30,2024,5,12,33,44,69,26,2\n");
        let err = parse_draw_csv(&game(), &body).unwrap_err();
        assert!(matches!(err, DataError::MalformedRow { row: 2, .. }));
    }

    #[test]
    fn rejects_short_row() {
        let body = format!("{HEADER}Powerball,1,6,2024,5,12\n");
        let err = parse_draw_csv(&game(), &body).unwrap_err();
        assert!(matches!(err, DataError::MalformedRow { row: 2, .. }));
    }

    #[test]
    fn header_only_file_is_empty() {
        let err = parse_draw_csv(&game(), HEADER).unwrap_err();
        assert!(matches!(err, DataError::EmptyFile { .. }));
    }
}
