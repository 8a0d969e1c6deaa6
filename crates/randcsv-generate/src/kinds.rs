/// Separator between alternatives of a pick-list token.
pub const PICK_LIST_SEPARATOR: char = ':';

/// Kind of value produced for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    /// Alphanumeric string of 5 to 9 characters.
    String,
    /// Integer between 1 and 99.
    Number,
    /// Local timestamp, `YYYY-MM-DD HH:MM:SS`.
    Date,
    /// Local timestamp, `YYYY-MM-DDTHH:MM:SS`.
    DateT,
    /// 128-bit lowercase hex value.
    Hexa,
    /// `#` followed by six lowercase hex digits.
    Color,
    /// Literal alternatives, one picked per row.
    PickList(Vec<String>),
}

impl ColumnKind {
    /// Resolve a type token. Keywords match case-insensitively; anything else
    /// is kept verbatim as a pick-list.
    pub fn parse(token: &str) -> Self {
        match token.to_uppercase().as_str() {
            "STRING" => ColumnKind::String,
            "NUMBER" => ColumnKind::Number,
            "DATE" => ColumnKind::Date,
            "DATET" => ColumnKind::DateT,
            "HEXA" => ColumnKind::Hexa,
            "COLOR" => ColumnKind::Color,
            _ => ColumnKind::PickList(
                token
                    .split(PICK_LIST_SEPARATOR)
                    .map(str::to_string)
                    .collect(),
            ),
        }
    }

    pub fn parse_all<S: AsRef<str>>(tokens: &[S]) -> Vec<Self> {
        tokens
            .iter()
            .map(|token| Self::parse(token.as_ref()))
            .collect()
    }

    /// Stable identifier used in reports and logs.
    pub fn id(&self) -> &'static str {
        match self {
            ColumnKind::String => "string",
            ColumnKind::Number => "number",
            ColumnKind::Date => "date",
            ColumnKind::DateT => "datet",
            ColumnKind::Hexa => "hexa",
            ColumnKind::Color => "color",
            ColumnKind::PickList(_) => "pick_list",
        }
    }
}
