//! Timed trivia session.
//!
//! Questions come from a fixed bank in random order. Each question has a
//! countdown driven by `tick()` (one call per second from the caller).
//! A correct answer earns `100 + time_left / 3`; a wrong answer or a
//! timeout earns nothing. Answering the last question completes the
//! session.

use tracing::{debug, info};

use super::{GameSession, Rejection, SessionComplete, SessionStatus, Summary};
use crate::core::{GameKind, GameRng, TriviaConfig};

/// Points for any correct answer.
pub const POINTS_PER_CORRECT: u64 = 100;

/// Remaining seconds per bonus point.
pub const SECS_PER_BONUS_POINT: u32 = 3;

/// Points for a correct answer with `time_left` seconds on the clock.
#[must_use]
pub fn answer_points(time_left: u32) -> u64 {
    POINTS_PER_CORRECT + u64::from(time_left / SECS_PER_BONUS_POINT)
}

/// A multiple-choice question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub text: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
    pub category: &'static str,
}

const QUESTIONS: [Question; 8] = [
    Question {
        text: "What is the capital of France?",
        options: ["London", "Berlin", "Paris", "Madrid"],
        correct: 2,
        category: "Geography",
    },
    Question {
        text: "Which planet is known as the Red Planet?",
        options: ["Venus", "Mars", "Jupiter", "Saturn"],
        correct: 1,
        category: "Science",
    },
    Question {
        text: "Who painted the Mona Lisa?",
        options: ["Van Gogh", "Picasso", "Leonardo da Vinci", "Michelangelo"],
        correct: 2,
        category: "Art",
    },
    Question {
        text: "What is the largest mammal in the world?",
        options: ["Elephant", "Blue Whale", "Giraffe", "Hippopotamus"],
        correct: 1,
        category: "Nature",
    },
    Question {
        text: "In which year did World War II end?",
        options: ["1944", "1945", "1946", "1947"],
        correct: 1,
        category: "History",
    },
    Question {
        text: "What is the chemical symbol for gold?",
        options: ["Go", "Gd", "Au", "Ag"],
        correct: 2,
        category: "Science",
    },
    Question {
        text: "Which country is home to the kangaroo?",
        options: ["New Zealand", "Australia", "South Africa", "Brazil"],
        correct: 1,
        category: "Geography",
    },
    Question {
        text: "What is the fastest land animal?",
        options: ["Lion", "Cheetah", "Leopard", "Tiger"],
        correct: 1,
        category: "Nature",
    },
];

/// The built-in question bank.
#[must_use]
pub fn question_bank() -> &'static [Question] {
    &QUESTIONS
}

/// How a question was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    TimedOut,
}

/// Result of resolving one question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answer {
    pub verdict: Verdict,
    /// Points earned for this question.
    pub points: u64,
    /// Index of the right option, for feedback.
    pub correct_option: usize,
    /// Running score after this question.
    pub score: u64,
    /// Set when this was the last question.
    pub completion: Option<SessionComplete>,
}

/// One attempt at the trivia quiz.
#[derive(Clone, Debug)]
pub struct TriviaSession {
    questions: Vec<Question>,
    current: usize,
    score: u64,
    correct: u32,
    time_left: u32,
    seconds_per_question: u32,
    started_at: u64,
    completion: Option<SessionComplete>,
}

impl TriviaSession {
    /// Start a quiz over the built-in bank.
    pub fn start(config: &TriviaConfig, rng: &mut GameRng, now_millis: u64) -> Self {
        Self::with_questions(question_bank().to_vec(), config, rng, now_millis)
    }

    /// Start a quiz over `questions`, shuffled.
    pub fn with_questions(
        mut questions: Vec<Question>,
        config: &TriviaConfig,
        rng: &mut GameRng,
        now_millis: u64,
    ) -> Self {
        assert!(!questions.is_empty(), "Trivia needs at least 1 question");
        rng.shuffle(&mut questions);
        debug!(questions = questions.len(), "trivia session started");

        Self {
            questions,
            current: 0,
            score: 0,
            correct: 0,
            time_left: config.seconds_per_question,
            seconds_per_question: config.seconds_per_question,
            started_at: now_millis,
            completion: None,
        }
    }

    /// Question being asked, or `None` once finished.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.completion.is_some() {
            return None;
        }
        self.questions.get(self.current)
    }

    /// Zero-based number of the current question.
    #[must_use]
    pub fn question_number(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct
    }

    /// Answer the current question with option `option`.
    pub fn answer(&mut self, option: usize) -> Result<Answer, Rejection> {
        let question = *self.current_question().ok_or(Rejection::Finished)?;
        if option >= question.options.len() {
            return Err(Rejection::OutOfRange(option));
        }

        let verdict = if option == question.correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };
        Ok(self.resolve(verdict))
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the timeout resolution when the clock runs out, `None`
    /// otherwise (including after the session has finished).
    pub fn tick(&mut self) -> Option<Answer> {
        self.current_question()?;

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            Some(self.resolve(Verdict::TimedOut))
        } else {
            None
        }
    }

    fn resolve(&mut self, verdict: Verdict) -> Answer {
        let correct_option = self.questions[self.current].correct;
        let points = match verdict {
            Verdict::Correct => answer_points(self.time_left),
            Verdict::Incorrect | Verdict::TimedOut => 0,
        };
        if verdict == Verdict::Correct {
            self.correct += 1;
        }
        self.score += points;
        debug!(question = self.current, ?verdict, points, "question resolved");

        self.current += 1;
        self.time_left = self.seconds_per_question;

        if self.current == self.questions.len() {
            let done = SessionComplete {
                kind: GameKind::Trivia,
                score: self.score,
                summary: Summary::Trivia {
                    correct: self.correct,
                    total: self.questions.len() as u32,
                },
            };
            info!(correct = self.correct, score = self.score, "trivia complete");
            self.completion = Some(done);
        }

        Answer {
            verdict,
            points,
            correct_option,
            score: self.score,
            completion: self.completion.clone(),
        }
    }
}

impl GameSession for TriviaSession {
    fn kind(&self) -> GameKind {
        GameKind::Trivia
    }

    fn status(&self) -> SessionStatus {
        if self.completion.is_some() {
            SessionStatus::Completed
        } else {
            SessionStatus::InProgress
        }
    }

    fn completion(&self) -> Option<&SessionComplete> {
        self.completion.as_ref()
    }

    fn elapsed_secs(&self, now_millis: u64) -> u64 {
        crate::core::elapsed_secs(self.started_at, now_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_questions() -> Vec<Question> {
        question_bank()[..2].to_vec()
    }

    fn session() -> TriviaSession {
        let config = TriviaConfig::default();
        TriviaSession::with_questions(two_questions(), &config, &mut GameRng::new(1), 0)
    }

    #[test]
    fn test_answer_points() {
        assert_eq!(answer_points(30), 110);
        assert_eq!(answer_points(29), 109);
        assert_eq!(answer_points(2), 100);
    }

    #[test]
    fn test_bank_is_consistent() {
        assert_eq!(question_bank().len(), 8);
        for q in question_bank() {
            assert!(q.correct < q.options.len());
        }
    }

    #[test]
    fn test_correct_answer_scores_with_bonus() {
        let mut s = session();
        s.tick();
        s.tick();
        let q = *s.current_question().unwrap();

        let answer = s.answer(q.correct).unwrap();
        assert_eq!(answer.verdict, Verdict::Correct);
        assert_eq!(answer.points, answer_points(28));
        assert_eq!(s.time_left(), 30);
        assert_eq!(s.question_number(), 1);
    }

    #[test]
    fn test_wrong_answer_scores_nothing() {
        let mut s = session();
        let q = *s.current_question().unwrap();
        let wrong = (q.correct + 1) % 4;

        let answer = s.answer(wrong).unwrap();
        assert_eq!(answer.verdict, Verdict::Incorrect);
        assert_eq!(answer.points, 0);
        assert_eq!(answer.correct_option, q.correct);
    }

    #[test]
    fn test_timeout_after_full_countdown() {
        let mut s = session();
        for _ in 0..29 {
            assert!(s.tick().is_none());
        }
        let answer = s.tick().unwrap();
        assert_eq!(answer.verdict, Verdict::TimedOut);
        assert_eq!(answer.points, 0);
        assert_eq!(s.question_number(), 1);
    }

    #[test]
    fn test_out_of_range_option() {
        let mut s = session();
        assert_eq!(s.answer(4), Err(Rejection::OutOfRange(4)));
        assert_eq!(s.question_number(), 0);
    }

    #[test]
    fn test_last_answer_completes() {
        let mut s = session();
        let first = *s.current_question().unwrap();
        s.answer(first.correct).unwrap();
        let second = *s.current_question().unwrap();
        let answer = s.answer(second.correct).unwrap();

        let done = answer.completion.unwrap();
        assert_eq!(done.kind, GameKind::Trivia);
        assert_eq!(done.score, 220);
        assert_eq!(done.summary, Summary::Trivia { correct: 2, total: 2 });
        assert_eq!(s.answer(0), Err(Rejection::Finished));
        assert!(s.tick().is_none());
    }
}
