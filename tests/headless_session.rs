use playmind::input::{AnswerProvider, ScriptedAnswers};
use playmind::level::{RandomOperands, ScriptedOperands};
use playmind::operation::Operation;
use playmind::session::{QuizSession, SessionSettings};
use playmind::QuizError;
use rand::{rngs::StdRng, SeedableRng};

// Headless sessions driven by seeded operands and scripted answers.

fn seeded(op: i64, level: i64, n: i64, seed: u64) -> QuizSession<RandomOperands<StdRng>> {
    QuizSession::from_choices(op, level, n, RandomOperands::new(StdRng::seed_from_u64(seed)))
        .unwrap()
}

/// Split " 3/10:  57 - 12 = " into (57, '-', 12)
fn parse_prompt(prompt: &str) -> (u64, char, u64) {
    let parts: Vec<&str> = prompt.split_whitespace().collect();
    assert_eq!(parts.len(), 5, "unexpected prompt {prompt:?}");
    assert_eq!(parts[4], "=");
    (
        parts[1].parse().unwrap(),
        parts[2].chars().next().unwrap(),
        parts[3].parse().unwrap(),
    )
}

/// Answers every question correctly when the result is whole,
/// recording the prompts it was shown.
struct Solver {
    prompts: Vec<String>,
}

impl AnswerProvider for Solver {
    fn ask_int(&mut self, prompt: &str) -> Result<u64, QuizError> {
        self.prompts.push(prompt.to_string());
        let (a, op, b) = parse_prompt(prompt);
        Ok(match op {
            '+' => a + b,
            '-' => a - b,
            '*' => a * b,
            '/' => a / b,
            _ => panic!("unknown operator {op}"),
        }
        .max(1))
    }
}

#[test]
fn larger_operand_always_first() {
    for op in 1..=4 {
        for level in 1..=5 {
            let mut answers = ScriptedAnswers::new(vec![1; 40]);
            seeded(op, level, 40, op as u64 * 10 + level as u64)
                .play(&mut answers)
                .unwrap();
            for prompt in answers.prompts() {
                let (a, _, b) = parse_prompt(prompt);
                assert!(a >= b, "{prompt:?}");
                let min = 10_u64.pow(level as u32 - 1);
                let max = 10_u64.pow(level as u32) - 1;
                assert!((min..=max).contains(&a) && (min..=max).contains(&b));
            }
        }
    }
}

#[test]
fn prompts_are_numbered_in_order() {
    let mut answers = ScriptedAnswers::new(vec![5; 3]);
    seeded(1, 1, 3, 0).play(&mut answers).unwrap();
    for (i, prompt) in answers.prompts().iter().enumerate() {
        assert!(prompt.starts_with(&format!(" {}/3:  ", i + 1)), "{prompt:?}");
        assert!(prompt.ends_with(" = "));
    }
}

#[test]
fn exact_operations_score_perfectly_when_solved() {
    for op in [1, 3] {
        let mut solver = Solver { prompts: vec![] };
        let result = seeded(op, 2, 20, 99).play(&mut solver).unwrap();
        assert_eq!(solver.prompts.len(), 20);
        assert_eq!(result.num_correct(), 20, "operation {op}");
        assert!(result.is_perfect());
    }
}

#[test]
fn subtraction_results_are_never_negative() {
    let mut solver = Solver { prompts: vec![] };
    let result = seeded(2, 1, 60, 11).play(&mut solver).unwrap();

    // the solver cannot answer 0, so equal operands count as misses
    let nonzero = solver
        .prompts
        .iter()
        .map(|p| parse_prompt(p))
        .filter(|&(a, _, b)| a != b)
        .count() as u32;
    assert_eq!(result.num_correct(), nonzero);
}

#[test]
fn division_matches_only_whole_quotients() {
    let mut solver = Solver { prompts: vec![] };
    let result = seeded(4, 1, 50, 5).play(&mut solver).unwrap();

    let whole = solver
        .prompts
        .iter()
        .map(|p| parse_prompt(p))
        .filter(|&(a, _, b)| {
            assert!(b >= 1);
            let expected: f64 = format!("{:.1}", a as f64 / b as f64).parse().unwrap();
            expected == (a / b) as f64
        })
        .count() as u32;
    assert_eq!(result.num_correct(), whole);
    assert_eq!(result.num_correct() + result.num_incorrect(), 50);
}

#[test]
fn division_scenario_900_by_300() {
    let mut session = QuizSession::from_choices(4, 2, 1, ScriptedOperands::new([900, 300])).unwrap();
    let result = session.play(&mut ScriptedAnswers::new([3])).unwrap();
    assert_eq!(result.num_correct(), 1);
    assert_eq!(result.operation(), Operation::Division);
}

#[test]
fn division_near_tie_is_scored_on_the_rounded_binary_value() {
    let mut session = QuizSession::from_choices(4, 2, 2, ScriptedOperands::new([39, 20])).unwrap();
    let result = session.play(&mut ScriptedAnswers::new([2, 1])).unwrap();
    assert_eq!(result.num_correct(), 0);
    assert_eq!(result.num_incorrect(), 2);
}

#[test]
fn identical_inputs_give_identical_results() {
    let answers: Vec<u64> = (1..=15).map(|i| i * 37).collect();
    let first = seeded(3, 2, 15, 1234)
        .play(&mut ScriptedAnswers::new(answers.clone()))
        .unwrap();
    let second = seeded(3, 2, 15, 1234)
        .play(&mut ScriptedAnswers::new(answers))
        .unwrap();
    assert_eq!(first.score(), second.score());
    assert!(first.elapsed_seconds() >= 0.0 && second.elapsed_seconds() >= 0.0);
}

#[test]
fn validation_errors_at_construction() {
    let settings = SessionSettings::from_choices(1, 1, 0);
    assert!(matches!(settings, Err(QuizError::InvalidQuestionCount(0))));
    assert!(matches!(
        SessionSettings::from_choices(1, 0, 5),
        Err(QuizError::InvalidSelection { .. })
    ));
    assert!(matches!(
        SessionSettings::from_choices(1, 6, 5),
        Err(QuizError::InvalidSelection { .. })
    ));
}
