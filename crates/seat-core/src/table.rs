//! Comma-separated room table parser.
//!
//! Expected header columns (case-insensitive): `BLOCK`, `ROOM NO`,
//! `Total Count`, and optionally `ROW-1` .. `ROW-8`. A row cell holding
//! `x` marks a row that does not exist in that room. Quoted fields are
//! not supported; a row containing `"` is rejected.

use tracing::warn;

use crate::catalog::{Block, Room, RoomCatalog};
use crate::error::{CoreError, CoreResult};

const MAX_ROWS: usize = 8;

struct Columns {
    block: usize,
    room: usize,
    total: usize,
    rows: Vec<usize>,
}

impl Columns {
    fn from_header(header: &str) -> CoreResult<Self> {
        let names: Vec<String> = header
            .split(',')
            .map(|h| h.trim().to_ascii_lowercase())
            .collect();
        let find = |want: &str| names.iter().position(|n| n == want);

        let block = find("block").ok_or(CoreError::MissingColumn("BLOCK"))?;
        let room = find("room no").ok_or(CoreError::MissingColumn("ROOM NO"))?;
        let total = find("total count").ok_or(CoreError::MissingColumn("Total Count"))?;
        let rows = (1..=MAX_ROWS)
            .filter_map(|i| find(&format!("row-{i}")))
            .collect();

        Ok(Self {
            block,
            room,
            total,
            rows,
        })
    }
}

/// Parse a room table into a catalog.
///
/// Rooms sharing a `BLOCK` value are grouped in first-seen order, and
/// rooms inside a block are sorted by id. A non-numeric `Total Count`
/// yields a zero-capacity (ineligible) room rather than an error.
pub fn parse_room_table(content: &str) -> CoreResult<RoomCatalog> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let Some((_, header)) = lines.next() else {
        return Err(CoreError::MissingColumn("BLOCK"));
    };
    let cols = Columns::from_header(header.trim_start_matches('\u{feff}'))?;

    let mut blocks: Vec<Block> = Vec::new();

    for (line, text) in lines {
        if text.contains('"') {
            return Err(CoreError::InvalidRow {
                line,
                reason: "quoted fields are not supported; remove '\"' and any commas inside values"
                    .to_string(),
            });
        }
        let cells: Vec<&str> = text.split(',').map(str::trim).collect();
        let cell = |i: usize| cells.get(i).copied().unwrap_or("");

        let block_name = cell(cols.block);
        let room_id = cell(cols.room);
        if block_name.is_empty() || room_id.is_empty() {
            return Err(CoreError::InvalidRow {
                line,
                reason: "BLOCK and ROOM NO must not be empty".to_string(),
            });
        }

        let capacity = match cell(cols.total).parse::<i64>() {
            Ok(c) => c,
            Err(_) => {
                warn!(
                    line,
                    room = room_id,
                    value = cell(cols.total),
                    "non-numeric Total Count, room marked ineligible"
                );
                0
            }
        };

        let mut layout = Vec::with_capacity(cols.rows.len());
        for &idx in &cols.rows {
            let value = cell(idx);
            if value.is_empty() || value.eq_ignore_ascii_case("x") {
                continue;
            }
            let seats = value.parse::<u32>().map_err(|_| CoreError::InvalidRow {
                line,
                reason: format!("row cell '{value}' is neither a seat count nor 'x'"),
            })?;
            layout.push(seats);
        }

        let room = Room::new(room_id, capacity).with_layout(layout);
        match blocks.iter_mut().find(|b| b.name == block_name) {
            Some(block) => block.rooms.push(room),
            None => blocks.push(Block::new(block_name, vec![room])),
        }
    }

    for block in &mut blocks {
        block.rooms.sort_by(|a, b| a.id.cmp(&b.id));
    }

    Ok(RoomCatalog::new(blocks))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
BLOCK,ROOM NO,Total Count,ROW-1,ROW-2,ROW-3
Main,M-102,30,10,10,10
Annex,X-1,12,6,x,6
Main,M-101,24,8,8,X
";

    #[test]
    fn groups_by_block_in_first_seen_order() {
        let catalog = parse_room_table(TABLE).unwrap();
        let names: Vec<&str> = catalog.blocks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Main", "Annex"]);
    }

    #[test]
    fn sorts_rooms_within_block() {
        let catalog = parse_room_table(TABLE).unwrap();
        let ids: Vec<&str> = catalog.blocks[0].rooms.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["M-101", "M-102"]);
    }

    #[test]
    fn x_cells_are_omitted_from_layout() {
        let catalog = parse_room_table(TABLE).unwrap();
        assert_eq!(catalog.blocks[0].rooms[0].layout, vec![8, 8]);
        assert_eq!(catalog.blocks[1].rooms[0].layout, vec![6, 6]);
    }

    #[test]
    fn header_match_is_case_insensitive() {
        let catalog = parse_room_table("block, room no ,TOTAL COUNT\nA,A1,5\n").unwrap();
        assert_eq!(catalog.blocks[0].rooms[0].capacity, 5);
    }

    #[test]
    fn non_numeric_capacity_becomes_ineligible() {
        let catalog = parse_room_table("BLOCK,ROOM NO,Total Count\nA,A1,n/a\n").unwrap();
        assert_eq!(catalog.blocks[0].rooms[0].usable_capacity(), 0);
    }

    #[test]
    fn missing_column_is_reported() {
        let err = parse_room_table("BLOCK,Total Count\nA,5\n").unwrap_err();
        assert!(matches!(err, CoreError::MissingColumn("ROOM NO")));
    }

    #[test]
    fn garbage_row_cell_is_rejected_with_line() {
        let err = parse_room_table("BLOCK,ROOM NO,Total Count,ROW-1\n\nA,A1,5,five\n").unwrap_err();
        match err {
            CoreError::InvalidRow { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_room_id_is_rejected() {
        let err = parse_room_table("BLOCK,ROOM NO,Total Count\nA,,5\n").unwrap_err();
        assert!(matches!(err, CoreError::InvalidRow { line: 2, .. }));
    }

    #[test]
    fn quoted_cells_are_rejected() {
        let err = parse_room_table("BLOCK,ROOM NO,Total Count\nA,\"Hall, West\",40\n").unwrap_err();
        match err {
            CoreError::InvalidRow { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("quoted"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
