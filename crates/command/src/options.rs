//! Form option providers for the campaign creation UI: timing and audience
//! enumerations keyed off the event-based flag, plus the event-based lookup
//! against the static campaign type table.

use crate::types::{CampaignType, CAMPAIGN_TYPES};

/// Audience options offered for event-based (loyalty) campaigns.
pub const EVENT_BASED_AUDIENCES: [&str; 5] = [
    "Appointment Bookers",
    "Website Visitors",
    "Purchase Events",
    "Service Completers",
    "Loyalty Program Members",
];

/// Audience options offered for standard campaigns.
pub const STANDARD_AUDIENCES: [&str; 9] = [
    "All Customers",
    "New Customers",
    "Inactive Customers (90+ days)",
    "5-Star Reviewers",
    "Customers with Negative Reviews",
    "Competitor Customers",
    "Customers with Birthdays This Month",
    "Customers Due for Service",
    "VIP Customers",
];

const EVENT_BASED_TIMING_OPTIONS: [&str; 5] = [
    "Ongoing (Always Active)",
    "Next 7 Days",
    "Next 30 Days",
    "Next 90 Days",
    "Custom Duration",
];

const STANDARD_TIMING_OPTIONS: [&str; 5] = [
    "Send Immediately",
    "Schedule for Tomorrow",
    "Schedule for Weekend",
    "Optimal Send Time (AI)",
    "Custom Schedule",
];

/// Whether a campaign type runs event-based, looked up in the static
/// [`CAMPAIGN_TYPES`] table. Types absent from the table (birthday, welcome,
/// service, custom) resolve to false.
pub fn is_event_based_campaign(campaign_type: CampaignType) -> bool {
    CAMPAIGN_TYPES
        .iter()
        .find(|def| def.value == campaign_type)
        .is_some_and(|def| def.is_event_based)
}

/// Timing options for the campaign form. Event-based campaigns run over a
/// duration; standard campaigns are scheduled sends. The two lists never
/// overlap.
pub fn timing_options(is_event_based: bool) -> &'static [&'static str] {
    if is_event_based {
        &EVENT_BASED_TIMING_OPTIONS
    } else {
        &STANDARD_TIMING_OPTIONS
    }
}

/// Audience options for the campaign form.
pub fn audience_options(is_event_based: bool) -> &'static [&'static str] {
    if is_event_based {
        &EVENT_BASED_AUDIENCES
    } else {
        &STANDARD_AUDIENCES
    }
}
