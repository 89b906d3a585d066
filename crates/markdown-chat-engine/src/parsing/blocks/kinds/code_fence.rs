/// A fence marker line, with the language tag found after the backticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub language: String,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const DEFAULT_LANGUAGE: &'static str = "plaintext";

    /// Detects a fence marker. Leading and trailing whitespace is ignored.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let rest = line.trim().strip_prefix(Self::BACKTICKS)?;
        let language = match rest.trim() {
            "" => Self::DEFAULT_LANGUAGE,
            tag => tag,
        };
        Some(FenceSig {
            language: language.to_string(),
        })
    }

    /// Any marker line closes an open fence, whatever tag follows it.
    pub fn closes(sig: Option<&FenceSig>) -> bool {
        sig.is_some()
    }
}
