//! Run Length Encoded (RLE) decoder.

use super::{PatternData, PatternError};
use crate::compute::ConwayState;
use crate::schema::RuleSet;

const DEAD: ConwayState = ConwayState::DEAD;

/// Parsed `x = W, y = H[, rule = Bx/Sy]` header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RleHeader {
    pub width: i32,
    pub height: i32,
    pub rules: Option<RuleSet>,
}

/// Split a header line into lowercased `key = value` pairs.
///
/// Commas are optional separators and whitespace around `=` is ignored, so
/// `x = 3, y = 3`, `x=3,y=3` and `x = 3 y = 3` all yield the same fields.
fn header_fields(line: &str) -> Vec<(String, String)> {
    let spaced = line.replace(',', " ");
    let mut tokens = spaced.split_whitespace();
    let mut fields = Vec::new();
    let mut previous: Option<&str> = None;

    while let Some(token) = tokens.next() {
        match token.split_once('=') {
            Some((key, value)) => {
                let key = match key {
                    "" => previous.take().unwrap_or_default(),
                    key => key,
                };
                let value = match value {
                    "" => tokens.next().unwrap_or_default(),
                    value => value,
                };
                fields.push((key.to_ascii_lowercase(), value.to_string()));
                previous = None;
            }
            None => previous = Some(token),
        }
    }
    fields
}

impl RleHeader {
    /// Parse `key = value` fields. Unknown keys are ignored.
    pub fn parse(line: &str) -> Result<Self, PatternError> {
        let malformed = || PatternError::MalformedHeader {
            line: line.to_string(),
        };
        let dimension = |value: &str| value.parse::<i32>().ok().filter(|v| *v > 0);

        let mut width = None;
        let mut height = None;
        let mut rules = None;

        for (key, value) in header_fields(line) {
            match key.as_str() {
                "x" => width = Some(dimension(&value).ok_or_else(malformed)?),
                "y" => height = Some(dimension(&value).ok_or_else(malformed)?),
                "rule" => {
                    let parsed = value
                        .parse::<RuleSet>()
                        .map_err(|_| PatternError::MalformedRule { rule: value.clone() })?;
                    rules = Some(parsed);
                }
                _ => {}
            }
        }

        match (width, height) {
            (Some(width), Some(height)) => Ok(Self {
                width,
                height,
                rules,
            }),
            _ => Err(malformed()),
        }
    }
}

/// Run-length state machine over the concatenated body.
///
/// Digits accumulate into `pending`; a tag (`o`, `b`, `$`) consumes it as
/// its run count (1 when absent); `!` terminates. Output never exceeds the
/// declared `width x height`: cells past the end of a row and rows past the
/// last one are dropped.
struct RunDecoder {
    width: usize,
    height: usize,
    rows: Vec<Vec<ConwayState>>,
    row: Vec<ConwayState>,
    pending: Option<usize>,
    clipped: bool,
}

impl RunDecoder {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: Vec::new(),
            row: Vec::new(),
            pending: None,
            clipped: false,
        }
    }

    fn push_digit(&mut self, digit: u32) {
        let count = self.pending.unwrap_or(0);
        self.pending = Some(count.saturating_mul(10).saturating_add(digit as usize));
    }

    fn take_count(&mut self) -> usize {
        self.pending.take().unwrap_or(1)
    }

    fn rows_full(&self) -> bool {
        self.rows.len() >= self.height
    }

    fn pad_row(&mut self) {
        if self.row.len() < self.width {
            self.row.resize(self.width, DEAD);
        }
    }

    /// Commit the current row if there is room for it.
    fn commit_row(&mut self) {
        let row = std::mem::take(&mut self.row);
        if self.rows_full() {
            self.clipped |= row.iter().any(|s| s.alive);
        } else {
            self.rows.push(row);
        }
    }

    fn emit_run(&mut self, alive: bool) {
        let count = self.take_count();
        let room = self.width - self.row.len();
        if count > room {
            self.clipped |= alive;
        }
        self.row
            .extend(std::iter::repeat_n(ConwayState::new(alive), count.min(room)));
    }

    /// `n$`: finish the current row, add `n - 1` blank rows, start a new row.
    fn break_rows(&mut self) {
        let count = self.take_count();
        if count == 0 {
            return;
        }
        self.pad_row();
        self.commit_row();
        let blank = (count - 1).min(self.height.saturating_sub(self.rows.len()));
        for _ in 0..blank {
            self.rows.push(vec![DEAD; self.width]);
        }
    }

    fn warn_if_clipped(&self) {
        if self.clipped {
            log::warn!(
                "RLE body exceeds its declared {}x{} size; extra live cells dropped",
                self.width,
                self.height
            );
        }
    }

    /// `!`: pad the current row and the row count to the declared size.
    fn terminate(mut self) -> Vec<Vec<ConwayState>> {
        if !self.row.is_empty() || !self.rows_full() {
            self.pad_row();
            self.commit_row();
        }
        while !self.rows_full() {
            self.rows.push(vec![DEAD; self.width]);
        }
        self.warn_if_clipped();
        self.rows
    }

    /// Body ended without `!`: keep whatever was decoded.
    fn unterminated(mut self) -> Vec<Vec<ConwayState>> {
        log::warn!(
            "RLE body has no '!' terminator; returning {} partial rows",
            self.rows.len() + usize::from(!self.row.is_empty())
        );
        if !self.row.is_empty() {
            self.commit_row();
        }
        self.warn_if_clipped();
        self.rows
    }

    fn decode(mut self, body: &str) -> Vec<Vec<ConwayState>> {
        for c in body.chars() {
            match c {
                '!' => return self.terminate(),
                'o' => self.emit_run(true),
                'b' => self.emit_run(false),
                '$' => self.break_rows(),
                _ => {
                    if let Some(digit) = c.to_digit(10) {
                        self.push_digit(digit);
                    }
                }
            }
        }
        self.unterminated()
    }
}

/// Decode RLE text.
///
/// The first non-comment line must be the header. Every following line is
/// trimmed and concatenated into the run-length body. Declared rules are
/// returned in [`PatternData::rules`] rather than applied.
///
/// A body without a `!` terminator is decoded leniently: the partial matrix
/// is returned as-is and may be smaller than the header declares.
pub fn rle<I, L>(lines: I) -> Result<PatternData, PatternError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut lines = lines.into_iter();

    let header = loop {
        let Some(line) = lines.next() else {
            return Err(PatternError::MissingHeader);
        };
        let line = line.as_ref().trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !line.contains('=') {
            return Err(PatternError::MissingHeader);
        }
        break RleHeader::parse(line)?;
    };

    let body: String = lines.map(|line| line.as_ref().trim().to_string()).collect();
    let states = RunDecoder::new(header.width as usize, header.height as usize).decode(&body);

    log::debug!(
        "Decoded RLE pattern: {}x{} declared, {} rows, rule {}",
        header.width,
        header.height,
        states.len(),
        header
            .rules
            .as_ref()
            .map_or_else(|| "unchanged".to_string(), RuleSet::to_string)
    );

    Ok(PatternData {
        xmax: header.width - 1,
        ymax: header.height - 1,
        states,
        rules: header.rules,
    })
}
