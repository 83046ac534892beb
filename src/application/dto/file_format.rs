/// File format enumeration for the supported content readers
///
/// Both the request DTO and the reader factory key off this enum, so it
/// lives in the application layer rather than in a specific adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Plain text, returned verbatim
    Text,
    /// Line-oriented CSV, line endings normalized
    Csv,
    /// JSON document, validated and pretty-printed
    Json,
}

impl FileFormat {
    /// All formats in display order
    pub const ALL: [FileFormat; 3] = [FileFormat::Text, FileFormat::Csv, FileFormat::Json];

    /// Label used in the output header (e.g. `TXT File Content: `)
    pub fn label(&self) -> &'static str {
        match self {
            FileFormat::Text => "TXT",
            FileFormat::Csv => "CSV",
            FileFormat::Json => "JSON",
        }
    }

    /// File read when no path is given for this format
    pub fn default_file_name(&self) -> &'static str {
        match self {
            FileFormat::Text => "example.txt",
            FileFormat::Csv => "example.csv",
            FileFormat::Json => "example.json",
        }
    }

    /// Header line printed before the file content
    pub fn header(&self) -> String {
        format!("{} File Content: ", self.label())
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileFormat::Text => write!(f, "text"),
            FileFormat::Csv => write!(f, "csv"),
            FileFormat::Json => write!(f, "json"),
        }
    }
}
