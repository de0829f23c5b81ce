//! Shared utilities for use cases.
//!
//! Cancellation checks and the cancellable provider call used by every
//! debate operation that talks to the model.

use crate::ports::completion::{CompletionProvider, ProviderError};
use crate::ports::progress::{DebateProgressNotifier, ProviderCall};
use crate::use_cases::run_debate::DebateError;
use debate_domain::{ChatMessage, ResponseSchema};
use tokio_util::sync::CancellationToken;

/// Check if cancellation has been requested.
///
/// Returns `Err(DebateError::Cancelled)` if the token exists and is cancelled.
pub(crate) fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), DebateError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(DebateError::Cancelled);
    }
    Ok(())
}

/// Call the provider, aborting if the token fires first.
///
/// With `schema` the call goes through `complete_structured`. A cancelled call
/// drops the in-flight request; nothing it would have produced is returned.
pub(crate) async fn complete_cancellable<P: CompletionProvider + ?Sized>(
    provider: &P,
    messages: &[ChatMessage],
    schema: Option<&ResponseSchema>,
    call: ProviderCall,
    progress: &dyn DebateProgressNotifier,
    cancellation_token: &Option<CancellationToken>,
) -> Result<String, DebateError> {
    check_cancelled(cancellation_token)?;
    progress.on_provider_call_start(call);

    let request = async {
        match schema {
            Some(schema) => provider.complete_structured(messages, schema).await,
            None => provider.complete(messages).await,
        }
    };

    let result: Result<String, ProviderError> = if let Some(token) = cancellation_token {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                progress.on_provider_call_end(call, false);
                return Err(DebateError::Cancelled);
            }
            result = request => result,
        }
    } else {
        request.await
    };

    progress.on_provider_call_end(call, result.is_ok());
    Ok(result?)
}
