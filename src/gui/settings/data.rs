use crate::core::session::DEFAULT_ROUND_SIZE;

pub const MIN_ROUND_SIZE: usize = 5;
pub const MAX_ROUND_SIZE: usize = 50;

#[derive(Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SettingsData {
    #[serde(default = "default_round_size")]
    pub round_size: usize,
    #[serde(default)]
    pub muted: bool,
}

fn default_round_size() -> usize {
    DEFAULT_ROUND_SIZE
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { round_size: DEFAULT_ROUND_SIZE, muted: false }
    }
}

impl SettingsData {
    /// Round size is user-editable json on disk; clamp rather than trust it.
    pub fn clamped_round_size(&self) -> usize {
        self.round_size.clamp(MIN_ROUND_SIZE, MAX_ROUND_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_session_default() {
        let settings = SettingsData::default();
        assert_eq!(settings.round_size, DEFAULT_ROUND_SIZE);
        assert!(!settings.muted);
    }

    #[test]
    fn out_of_range_sizes_are_clamped() {
        let mut settings = SettingsData::default();
        settings.round_size = 0;
        assert_eq!(settings.clamped_round_size(), MIN_ROUND_SIZE);
        settings.round_size = 10_000;
        assert_eq!(settings.clamped_round_size(), MAX_ROUND_SIZE);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let settings: SettingsData = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.round_size, DEFAULT_ROUND_SIZE);
        assert!(!settings.muted);
    }
}
