mod common;

use common::{hit, memory_documents, CountingSearcher, StubCompletion, StubSearcher};
use ragbase::application::answer::AnswerService;
use ragbase::domain::error::DomainError;
use ragbase::domain::ports::completion_port::SamplingConfig;
use ragbase::domain::values::context::NO_CONTEXT;
use ragbase::domain::values::smalltalk::Smalltalk;

fn answerer(
    searcher: std::sync::Arc<StubSearcher>,
    completion: std::sync::Arc<StubCompletion>,
) -> AnswerService {
    AnswerService::new(searcher, completion, SamplingConfig::default())
}

#[tokio::test]
async fn greeting_short_circuits_without_collaborators() {
    let searcher = StubSearcher::returning(vec![]);
    let completion = StubCompletion::new("unused");
    let svc = answerer(searcher.clone(), completion.clone());

    let reply = svc.answer_question("こんにちは").await.unwrap();
    assert_eq!(reply, Smalltalk::Greeting.reply());
    assert_eq!(searcher.call_count(), 0);
    assert_eq!(completion.call_count(), 0);

    let reply = svc.answer_question("Hello!").await.unwrap();
    assert_eq!(reply, Smalltalk::Greeting.reply());

    let reply = svc.answer_question("thanks so much").await.unwrap();
    assert_eq!(reply, Smalltalk::Thanks.reply());

    let reply = svc.answer_question("goodbye").await.unwrap();
    assert_eq!(reply, Smalltalk::Farewell.reply());

    assert_eq!(searcher.call_count(), 0);
    assert_eq!(completion.call_count(), 0);
}

#[tokio::test]
async fn blank_input_fails_validation_without_collaborators() {
    let searcher = StubSearcher::returning(vec![]);
    let completion = StubCompletion::new("unused");
    let svc = answerer(searcher.clone(), completion.clone());

    for blank in ["", "   ", "\n\t"] {
        match svc.answer_question(blank).await {
            Err(DomainError::Validation(_)) => {}
            other => panic!("expected Validation for {blank:?}, got {other:?}"),
        }
    }
    assert_eq!(searcher.call_count(), 0);
    assert_eq!(completion.call_count(), 0);
}

#[tokio::test]
async fn empty_retrieval_passes_sentinel_context() {
    let searcher = StubSearcher::returning(vec![]);
    let completion = StubCompletion::new("fallback answer");
    let svc = answerer(searcher, completion.clone());

    svc.answer_question("What is the meaning of life?").await.unwrap();

    assert_eq!(completion.call_count(), 1);
    assert!(completion.last_user_content().contains(NO_CONTEXT));
}

#[tokio::test]
async fn context_is_assembled_from_titles_and_texts() {
    let searcher = StubSearcher::returning(vec![hit("1", "T1", "C1"), hit("2", "T2", "C2")]);
    let completion = StubCompletion::new("grounded answer");
    let svc = answerer(searcher, completion.clone());

    let answer = svc.answer_question("What is C1?").await.unwrap();
    assert_eq!(answer, "grounded answer");

    let user = completion.last_user_content();
    assert!(user.contains("[T1]\nC1\n\n[T2]\nC2"));
    assert!(user.contains("Question: What is C1?"));
}

#[tokio::test]
async fn retrieval_failure_is_wrapped_with_cause() {
    let searcher = StubSearcher::failing("store exploded");
    let completion = StubCompletion::new("unused");
    let svc = answerer(searcher, completion.clone());

    match svc.answer_question("real question").await {
        Err(DomainError::AnswerGeneration { source }) => {
            assert!(matches!(*source, DomainError::Store(_)));
        }
        other => panic!("expected AnswerGeneration, got {other:?}"),
    }
    assert_eq!(completion.call_count(), 0);
}

#[tokio::test]
async fn end_to_end_grounds_answer_in_stored_document() {
    let docs = memory_documents();
    docs.add_document("d1", "Hours", "We are open 9 to 5.")
        .await
        .unwrap();

    let searcher = CountingSearcher::wrap(docs);
    let completion = StubCompletion::new("We are open from 9 to 5.");
    let svc = AnswerService::new(searcher.clone(), completion.clone(), SamplingConfig::default());

    let question = "What are your hours?";
    let answer = svc.answer_question(question).await.unwrap();
    assert_eq!(answer, "We are open from 9 to 5.");

    assert_eq!(searcher.call_count(), 1);
    assert_eq!(searcher.queries.lock().unwrap()[0], question);

    assert_eq!(completion.call_count(), 1);
    let user = completion.last_user_content();
    assert!(user.contains("[Hours]"));
    assert!(user.contains("9 to 5"));
    assert!(user.contains(&format!("Question: {question}")));
}
