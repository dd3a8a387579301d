use crate::{generate_field, Config, FieldLoadError, Grid, StartupError};
use rand::Rng;
use std::io::BufRead;

/// Outcome of reading the initial field.
#[derive(Debug, PartialEq, Eq)]
pub enum FieldLoad {
    Loaded(Grid),
    /// The very first row was empty or the input had already ended.
    NoInput,
    Malformed(FieldLoadError),
}

/// Reads `config.height` rows of exactly `config.width` markers.
///
/// Rows end at `\n` (optionally preceded by `\r`) or at the end of input.
/// Only I/O failures of `reader` are reported as `Err`.
pub fn parse_field(reader: &mut impl BufRead, config: &Config) -> std::io::Result<FieldLoad> {
    let mut cells = Vec::with_capacity(config.width * config.height);
    let mut line = String::new();
    for row in 0..config.height {
        line.clear();
        reader.read_line(&mut line)?;
        let data = line.strip_suffix('\n').unwrap_or(&line);
        let data = data.strip_suffix('\r').unwrap_or(data);

        if row == 0 && data.is_empty() {
            return Ok(FieldLoad::NoInput);
        }
        let mut found = 0;
        for (col, ch) in data.chars().enumerate() {
            match config.markers.parse(ch) {
                Some(alive) if col < config.width => cells.push(alive),
                Some(_) => {}
                None => {
                    return Ok(FieldLoad::Malformed(FieldLoadError::UnexpectedChar {
                        row,
                        col,
                        ch,
                    }))
                }
            }
            found += 1;
        }
        if found != config.width {
            return Ok(FieldLoad::Malformed(FieldLoadError::RowLength {
                row,
                expected: config.width,
                found,
            }));
        }
    }
    Ok(FieldLoad::Loaded(Grid::from_cells(
        config.width,
        config.height,
        cells,
    )))
}

/// Loads the field from `reader`, falling back to a random one when there is no input.
pub fn init_field(
    reader: &mut impl BufRead,
    config: &Config,
    rng: &mut impl Rng,
) -> Result<Grid, StartupError> {
    match parse_field(reader, config)? {
        FieldLoad::Loaded(grid) => {
            log::info!("Field loaded: population={}", grid.population());
            Ok(grid)
        }
        FieldLoad::NoInput => {
            let grid = generate_field(config, rng);
            log::info!("Field generated: population={}", grid.population());
            Ok(grid)
        }
        FieldLoad::Malformed(e) => {
            log::error!("Malformed field: {}", e);
            Err(e.into())
        }
    }
}
