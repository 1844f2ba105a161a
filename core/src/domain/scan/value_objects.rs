pub const DEFAULT_HISTORY_LIMIT: u32 = 100;
pub const MAX_HISTORY_LIMIT: u32 = 100;
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Clone)]
pub struct ManualScanInput {
    pub product_name: String,
    pub ingredient_text: String,
}

#[derive(Debug, Clone)]
pub struct ImageScanInput {
    /// Falls back to the name read from the label when absent.
    pub product_name: Option<String>,
    pub image_data: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct GetScanHistoryInput {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetScanHistoryFilter {
    pub offset: u32,
    pub limit: u32,
}

impl From<GetScanHistoryInput> for GetScanHistoryFilter {
    fn from(input: GetScanHistoryInput) -> Self {
        Self {
            offset: input.offset.unwrap_or(0),
            limit: input
                .limit
                .unwrap_or(DEFAULT_HISTORY_LIMIT)
                .clamp(1, MAX_HISTORY_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_filter_defaults_and_clamps() {
        assert_eq!(
            GetScanHistoryFilter::from(GetScanHistoryInput::default()),
            GetScanHistoryFilter {
                offset: 0,
                limit: 100
            }
        );
        let filter = GetScanHistoryFilter::from(GetScanHistoryInput {
            offset: Some(5),
            limit: Some(0),
        });
        assert_eq!(filter.limit, 1);
        assert_eq!(filter.offset, 5);
        let filter = GetScanHistoryFilter::from(GetScanHistoryInput {
            offset: None,
            limit: Some(500),
        });
        assert_eq!(filter.limit, 100);
    }
}
