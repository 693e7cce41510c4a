//! The `resource.operation` catalogue and its mapping onto REST calls.

mod call;
pub mod params;

pub use call::OperationCall;

use crate::error::OperationError;

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Item,
    Thing,
    Rule,
    System,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Item => "item",
            Resource::Thing => "thing",
            Resource::Rule => "rule",
            Resource::System => "system",
        }
    }
}

/// Every supported operation, one variant per catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubOperation {
    ItemList,
    ItemGet,
    ItemState,
    ItemCommand,
    ItemUpdateState,
    ItemMetadata,
    ThingList,
    ThingGet,
    ThingStatus,
    RuleList,
    RuleRun,
    RuleToggle,
    SystemInfo,
}

impl HubOperation {
    pub const ALL: [HubOperation; 13] = [
        HubOperation::ItemList,
        HubOperation::ItemGet,
        HubOperation::ItemState,
        HubOperation::ItemCommand,
        HubOperation::ItemUpdateState,
        HubOperation::ItemMetadata,
        HubOperation::ThingList,
        HubOperation::ThingGet,
        HubOperation::ThingStatus,
        HubOperation::RuleList,
        HubOperation::RuleRun,
        HubOperation::RuleToggle,
        HubOperation::SystemInfo,
    ];

    pub fn resource(&self) -> Resource {
        match self {
            HubOperation::ItemList
            | HubOperation::ItemGet
            | HubOperation::ItemState
            | HubOperation::ItemCommand
            | HubOperation::ItemUpdateState
            | HubOperation::ItemMetadata => Resource::Item,
            HubOperation::ThingList | HubOperation::ThingGet | HubOperation::ThingStatus => {
                Resource::Thing
            }
            HubOperation::RuleList | HubOperation::RuleRun | HubOperation::RuleToggle => {
                Resource::Rule
            }
            HubOperation::SystemInfo => Resource::System,
        }
    }

    pub fn operation_name(&self) -> &'static str {
        match self {
            HubOperation::ItemList | HubOperation::ThingList | HubOperation::RuleList => "list",
            HubOperation::ItemGet | HubOperation::ThingGet => "get",
            HubOperation::ItemState => "state",
            HubOperation::ItemCommand => "command",
            HubOperation::ItemUpdateState => "updateState",
            HubOperation::ItemMetadata => "metadata",
            HubOperation::ThingStatus => "status",
            HubOperation::RuleRun => "run",
            HubOperation::RuleToggle => "toggle",
            HubOperation::SystemInfo => "info",
        }
    }

    /// Look up the operation selected by a `(resource, operation)` pair.
    #[track_caller]
    pub fn from_names(resource: &str, operation: &str) -> Result<Self, OperationError> {
        Self::ALL
            .into_iter()
            .find(|candidate| {
                candidate.resource().as_str() == resource
                    && candidate.operation_name() == operation
            })
            .ok_or_else(|| OperationError::unknown_operation(format!("{resource}.{operation}")))
    }
}

impl fmt::Display for HubOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource().as_str(), self.operation_name())
    }
}

impl FromStr for HubOperation {
    type Err = OperationError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.split_once('.') {
            Some((resource, operation)) => Self::from_names(resource, operation),
            None => Err(OperationError::unknown_operation(value)),
        }
    }
}
