use crate::dispatch::RequestDescriptor;
use crate::error::OperationError;
use crate::operations::HubOperation;
use crate::operations::params::{self, InputRow};

use models::{OutputRow, ResponsePayload};

use serde_json::{Value, json};

/// Query value that asks openHAB for every metadata namespace.
const ALL_METADATA_NAMESPACES: &str = ".*";

/// An operation with its parameters resolved from one input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationCall {
    ItemList { tags: Option<String> },
    ItemGet { name: String },
    ItemState { name: String },
    ItemCommand { name: String, command: String },
    ItemUpdateState { name: String, state: String },
    ItemMetadata { name: String },
    ThingList,
    ThingGet { uid: String },
    ThingStatus { uid: String },
    RuleList,
    RuleRun { uid: String },
    RuleToggle { uid: String, enable: bool },
    SystemInfo,
}

impl OperationCall {
    /// Pull the parameters `operation` needs out of `row`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError`] when a required parameter is missing, blank
    /// or of the wrong type.
    pub fn resolve(operation: HubOperation, row: &InputRow) -> Result<Self, OperationError> {
        let call = match operation {
            HubOperation::ItemList => OperationCall::ItemList {
                tags: params::tag_filter(params::optional_string(row, params::TAGS)?),
            },
            HubOperation::ItemGet => OperationCall::ItemGet {
                name: params::required_string(row, params::ITEM_NAME)?,
            },
            HubOperation::ItemState => OperationCall::ItemState {
                name: params::required_string(row, params::ITEM_NAME)?,
            },
            HubOperation::ItemCommand => OperationCall::ItemCommand {
                name: params::required_string(row, params::ITEM_NAME)?,
                command: params::required_string(row, params::COMMAND)?,
            },
            HubOperation::ItemUpdateState => OperationCall::ItemUpdateState {
                name: params::required_string(row, params::ITEM_NAME)?,
                state: params::required_string(row, params::STATE)?,
            },
            HubOperation::ItemMetadata => OperationCall::ItemMetadata {
                name: params::required_string(row, params::ITEM_NAME)?,
            },
            HubOperation::ThingList => OperationCall::ThingList,
            HubOperation::ThingGet => OperationCall::ThingGet {
                uid: params::required_string(row, params::THING_UID)?,
            },
            HubOperation::ThingStatus => OperationCall::ThingStatus {
                uid: params::required_string(row, params::THING_UID)?,
            },
            HubOperation::RuleList => OperationCall::RuleList,
            HubOperation::RuleRun => OperationCall::RuleRun {
                uid: params::required_string(row, params::RULE_UID)?,
            },
            HubOperation::RuleToggle => OperationCall::RuleToggle {
                uid: params::required_string(row, params::RULE_UID)?,
                enable: params::required_bool(row, params::ENABLE)?,
            },
            HubOperation::SystemInfo => OperationCall::SystemInfo,
        };

        Ok(call)
    }

    /// The REST call for this operation. Identifier segments are percent-encoded.
    pub fn request(&self) -> RequestDescriptor {
        match self {
            OperationCall::ItemList { tags } => {
                let request = RequestDescriptor::get("/items");
                match tags {
                    Some(tags) => request.with_query("tags", tags.as_str()),
                    None => request,
                }
            }
            OperationCall::ItemGet { name } => {
                RequestDescriptor::get(format!("/items/{}", encode(name)))
            }
            OperationCall::ItemState { name } => {
                RequestDescriptor::get(format!("/items/{}/state", encode(name))).plain_text()
            }
            OperationCall::ItemCommand { name, command } => {
                RequestDescriptor::post(format!("/items/{}", encode(name)))
                    .with_text_body(command.as_str())
                    .plain_text()
                    .full_response()
            }
            OperationCall::ItemUpdateState { name, state } => {
                RequestDescriptor::put(format!("/items/{}/state", encode(name)))
                    .with_text_body(state.as_str())
                    .plain_text()
                    .full_response()
            }
            OperationCall::ItemMetadata { name } => {
                RequestDescriptor::get(format!("/items/{}", encode(name)))
                    .with_query("metadata", ALL_METADATA_NAMESPACES)
            }
            OperationCall::ThingList => RequestDescriptor::get("/things"),
            OperationCall::ThingGet { uid } => {
                RequestDescriptor::get(format!("/things/{}", encode(uid)))
            }
            OperationCall::ThingStatus { uid } => {
                RequestDescriptor::get(format!("/things/{}/status", encode(uid)))
            }
            OperationCall::RuleList => RequestDescriptor::get("/rules"),
            OperationCall::RuleRun { uid } => {
                RequestDescriptor::post(format!("/rules/{}/runnow", encode(uid))).full_response()
            }
            OperationCall::RuleToggle { uid, enable } => {
                RequestDescriptor::post(format!("/rules/{}/enable", encode(uid)))
                    .with_text_body(enable.to_string())
                    .plain_text()
                    .full_response()
            }
            OperationCall::SystemInfo => RequestDescriptor::get("/systeminfo"),
        }
    }

    /// Shape a successful payload into output rows.
    pub fn shape(self, payload: ResponsePayload) -> Vec<OutputRow> {
        let status_code = payload
            .status_code()
            .map(Value::from)
            .unwrap_or(Value::Null);

        let row = match self {
            OperationCall::ItemState { name } => OutputRow::new()
                .with("item", name)
                .with("state", payload.body().clone().into_value()),
            OperationCall::ItemCommand { name, command } => OutputRow::new()
                .with("item", name)
                .with("command", command)
                .with("statusCode", status_code),
            OperationCall::ItemUpdateState { name, state } => OutputRow::new()
                .with("item", name)
                .with("state", state)
                .with("statusCode", status_code),
            OperationCall::ItemMetadata { name } => {
                let metadata = payload
                    .into_value()
                    .get("metadata")
                    .cloned()
                    .unwrap_or_else(|| json!({}));
                OutputRow::new().with("item", name).with("metadata", metadata)
            }
            OperationCall::RuleRun { uid } => OutputRow::new()
                .with("rule", uid)
                .with("statusCode", status_code),
            OperationCall::RuleToggle { uid, enable } => OutputRow::new()
                .with("rule", uid)
                .with("enabled", enable)
                .with("statusCode", status_code),
            OperationCall::ItemList { .. }
            | OperationCall::ItemGet { .. }
            | OperationCall::ThingList
            | OperationCall::ThingGet { .. }
            | OperationCall::ThingStatus { .. }
            | OperationCall::RuleList
            | OperationCall::SystemInfo => return OutputRow::expand(payload.into_value()),
        };

        vec![row]
    }
}

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
