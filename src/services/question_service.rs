use tracing::info;

use crate::{dto::question::QuestionSummary, error::ServiceError, state::SharedState};

/// Draw one question uniformly at random, optionally removing it from the bank.
pub async fn draw_question(
    state: &SharedState,
    consume: bool,
) -> Result<QuestionSummary, ServiceError> {
    let question = state.questions().draw(consume).await?;
    info!(prompt = %question.prompt, consume, "question drawn");
    Ok(QuestionSummary::from_question(
        question,
        &state.config(),
        consume,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::state_in;

    const BANK: &str = "Capital of France? => [Paris, Lyon, Nice, 0]\n\
                        2+2? => [3, 4, 1]\n";

    #[tokio::test]
    async fn draw_reports_scoring_options() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path(), "", BANK);

        let drawn = draw_question(&state, false).await.unwrap();
        assert_eq!(drawn.points, state.config().points_per_answer);
        assert!(!drawn.consumed);
        assert_eq!(state.questions().load_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn consuming_draws_empty_the_bank() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path(), "", BANK);

        let first = draw_question(&state, true).await.unwrap();
        let second = draw_question(&state, true).await.unwrap();
        assert_ne!(first.prompt, second.prompt);
        assert!(first.consumed && second.consumed);

        assert!(matches!(
            draw_question(&state, true).await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
