#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteIdError {
	NotANumber,
	Zero,
	/// Digits were read but the value does not fit a 32-bit id.
	OutOfRange,
}

/// Parses a path segment into a note id.
///
/// Leading whitespace and one optional sign are skipped, then the leading run of decimal digits is
/// read and whatever follows it is ignored, so `"12abc"` and `"1.5"` both name a note. Zero is
/// never a valid id.
pub fn parse_note_id(raw: &str) -> Result<i32, NoteIdError> {
	let rest = raw.trim_start();
	let (negative, rest) = match rest.strip_prefix('-') {
		Some(unsigned) => (true, unsigned),
		None => (false, rest.strip_prefix('+').unwrap_or(rest)),
	};
	let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
	let digits = &rest[..end];

	if digits.is_empty() {
		return Err(NoteIdError::NotANumber);
	}
	if digits.bytes().all(|b| b == b'0') {
		return Err(NoteIdError::Zero);
	}

	let magnitude = digits
		.bytes()
		.try_fold(0_i64, |acc, b| acc.checked_mul(10)?.checked_add(i64::from(b - b'0')))
		.ok_or(NoteIdError::OutOfRange)?;
	let value = if negative { -magnitude } else { magnitude };

	i32::try_from(value).map_err(|_| NoteIdError::OutOfRange)
}
