//! Per-row execution of one operation over a batch of input rows.
//!
//! Rows run strictly one after another: each call resolves completely before
//! the next row starts.

use crate::dispatch::Dispatcher;
use crate::error::OperationError;
use crate::operations::params::InputRow;
use crate::operations::{HubOperation, OperationCall};
use crate::transport::Transport;

use models::{Credentials, OutputRow};

use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutorOptions {
    /// Record failures as `{error}` rows and keep going instead of aborting.
    pub continue_on_fail: bool,
    /// Enable per-request diagnostic logging.
    pub debug: bool,
}

pub struct RowExecutor<'a, T: Transport> {
    dispatcher: &'a Dispatcher<T>,
    credentials: &'a Credentials,
    options: ExecutorOptions,
}

impl<'a, T: Transport> RowExecutor<'a, T> {
    pub fn new(
        dispatcher: &'a Dispatcher<T>,
        credentials: &'a Credentials,
        options: ExecutorOptions,
    ) -> Self {
        Self {
            dispatcher,
            credentials,
            options,
        }
    }

    /// Run `operation` once per row and collect the output rows.
    ///
    /// # Errors
    ///
    /// Without `continue_on_fail`, returns the first row's error and skips
    /// the remaining rows.
    pub async fn execute(
        &self,
        operation: HubOperation,
        rows: &[InputRow],
    ) -> Result<Vec<OutputRow>, OperationError> {
        let mut output = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            match self.execute_row(operation, row).await {
                Ok(shaped) => {
                    debug!("{operation} row {index}: {} output row(s)", shaped.len());
                    output.extend(shaped);
                }
                Err(error) if self.options.continue_on_fail => {
                    warn!("{operation} row {index} failed, continuing: {}", error.message());
                    output.push(OutputRow::error(error.message()));
                }
                Err(error) => {
                    warn!("{operation} row {index} failed, aborting batch: {}", error.message());
                    return Err(error);
                }
            }
        }

        info!(
            "{operation} processed {} input row(s) into {} output row(s)",
            rows.len(),
            output.len()
        );
        Ok(output)
    }

    /// Resolve parameters, dispatch once and shape the payload for one row.
    pub async fn execute_row(
        &self,
        operation: HubOperation,
        row: &InputRow,
    ) -> Result<Vec<OutputRow>, OperationError> {
        let call = OperationCall::resolve(operation, row)?;
        let request = call.request().debug(self.options.debug);
        let payload = self.dispatcher.dispatch(self.credentials, &request).await?;

        Ok(call.shape(payload))
    }
}
