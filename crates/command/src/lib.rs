//! Natural-language campaign command parsing.
//!
//! Pure, total classification: free text in, structured campaign descriptor
//! out, plus the form option providers and channel validation the campaign
//! creation flow needs. No I/O, no shared state; safe to call concurrently.

pub mod channels;
pub mod options;
pub mod parser;
pub mod types;

pub use channels::validate_channels;
pub use options::{
    audience_options, is_event_based_campaign, timing_options, EVENT_BASED_AUDIENCES,
    STANDARD_AUDIENCES,
};
pub use parser::parse_campaign_command;
pub use types::{
    CampaignType, CampaignTypeDefinition, Channel, ChannelValidationResult, ParsedCampaign,
    AVAILABLE_CHANNELS, CAMPAIGN_TYPES,
};
