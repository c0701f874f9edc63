mod common;

use common::{env, env_with, noisy_params};
use grid::Action;
use tabular::{BonusCache, EnvConfig, PolicyKind, RewardParams, TabularEnv, Termination};

const STEP: f64 = -1.0;
const TERMINAL: f64 = 100.0;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn noise_free_step_on_a_six_by_six_grid() {
    for policy in [PolicyKind::Sparse, PolicyKind::SemiSparse, PolicyKind::Dense] {
        let mut env = env(6, 6, policy);
        env.reset_to(14).unwrap();
        let outcome = env.step(Action::Up).unwrap();
        let expected = match policy {
            PolicyKind::Sparse => 0.0,
            PolicyKind::SemiSparse => STEP,
            PolicyKind::Dense => f64::from(env.policy().bonus().unwrap()[20]) + STEP,
        };
        assert!(close(outcome.reward, expected), "{policy}: {}", outcome.reward);
        assert!(close(outcome.reward_noise, 0.0));
        assert_eq!(outcome.reward_variance, None);
        assert_eq!(outcome.termination, Termination::NotDone);
    }
}

#[test]
fn dense_bonus_is_paid_once_per_episode() {
    let mut env = env(6, 6, PolicyKind::Dense);
    let bonus = f64::from(env.policy().bonus().unwrap()[20]);
    env.reset_to(14).unwrap();

    assert!(close(env.step(Action::Up).unwrap().reward, bonus + STEP));
    assert!(close(env.step(Action::Down).unwrap().reward, STEP), "start cell counts as visited");
    assert!(close(env.step(Action::Up).unwrap().reward, STEP));

    env.reset_to(14).unwrap();
    assert!(close(env.step(Action::Up).unwrap().reward, bonus + STEP), "reset clears visits");
}

#[test]
fn sparse_terminal_reward_subtracts_the_steps_taken() {
    for k in 1..6 {
        let mut env = env(6, 6, PolicyKind::Sparse);
        env.reset_to(k).unwrap();
        for _ in 1..k {
            let outcome = env.step(Action::Left).unwrap();
            assert!(close(outcome.reward, 0.0));
            assert_eq!(outcome.reward_variance, None);
        }
        let last = env.step(Action::Left).unwrap();
        assert_eq!(last.termination, Termination::TerminalReached);
        assert_eq!(env.step_count(), k);
        assert!(close(last.reward, TERMINAL + k as f64 * STEP), "k = {k}");
        assert!(close(last.reward_noise, 0.0));
    }
}

#[test]
fn sparse_step_limit_pays_one_step_penalty() {
    let config = EnvConfig::new(4, 4, PolicyKind::Sparse, RewardParams::zero()).with_max_steps(5);
    let mut env = env_with(config);
    env.reset_to(15).unwrap();
    let mut last = None;
    for _ in 0..5 {
        last = Some(env.step(Action::Right).unwrap());
    }
    let last = last.unwrap();
    assert_eq!(last.termination, Termination::StepLimitReached);
    assert!(close(last.reward, STEP));
}

#[test]
fn semi_sparse_distinguishes_only_the_terminal_cell() {
    let config = EnvConfig::new(3, 3, PolicyKind::SemiSparse, RewardParams::zero()).with_max_steps(3);
    let mut env = env_with(config);

    env.reset_to(8).unwrap();
    let rewards: Vec<f64> = (0..3).map(|_| env.step(Action::Up).unwrap().reward).collect();
    assert!(rewards.iter().all(|r| close(*r, STEP)), "{rewards:?}");
    assert_eq!(env.termination(), Termination::StepLimitReached);

    env.reset_to(3).unwrap();
    let outcome = env.step(Action::Down).unwrap();
    assert_eq!(outcome.termination, Termination::TerminalReached);
    assert!(close(outcome.reward, TERMINAL));
}

#[test]
fn dense_terminal_pays_the_plain_terminal_bonus() {
    let mut env = env(6, 6, PolicyKind::Dense);
    env.reset_to(6).unwrap();
    let outcome = env.step(Action::Down).unwrap();
    assert!(close(outcome.reward, TERMINAL));
}

#[test]
fn dense_environments_share_one_table_per_grid_size() {
    let cache = BonusCache::new();
    let build = |seed| {
        let config = EnvConfig::new(6, 6, PolicyKind::Dense, RewardParams::zero()).with_seed(Some(seed));
        TabularEnv::with_cache(&config, &cache).unwrap()
    };
    let a = build(1);
    let b = build(2);
    assert_eq!(a.policy().bonus(), b.policy().bonus());
    assert_eq!(cache.get(6, 6).as_deref(), a.policy().bonus());
    assert_eq!(cache.len(), 1);
}

#[test]
fn default_constructor_uses_the_process_wide_cache() {
    let make = |seed| {
        let config = EnvConfig::new(7, 5, PolicyKind::Dense, RewardParams::zero()).with_seed(Some(seed));
        TabularEnv::new(&config).unwrap()
    };
    let a = make(10);
    let b = make(20);
    assert_eq!(a.policy().bonus(), b.policy().bonus());
    assert!(BonusCache::global().get(7, 5).is_some());
}

#[test]
fn noisy_rewards_report_variance_but_keep_the_mean() {
    let config = EnvConfig::new(6, 6, PolicyKind::SemiSparse, noisy_params()).with_seed(Some(5));
    let mut env = env_with(config);
    env.reset_to(35).unwrap();
    let mut saw_noise = false;
    for _ in 0..20 {
        let outcome = env.step(Action::Up).unwrap();
        if outcome.is_done() {
            break;
        }
        // The realized reward is the policy mean; noise is only reported.
        assert!(close(outcome.reward, STEP));
        let variance = outcome.reward_variance.unwrap();
        assert!(variance >= 0.0);
        saw_noise |= outcome.reward_noise.abs() > 0.0;
    }
    assert!(saw_noise);
}

#[test]
fn mean_variance_without_variance_of_variance_is_reported_exactly() {
    let params = RewardParams { rvar_mean_step: 2.5, ..RewardParams::zero() };
    let mut env = env_with(EnvConfig::new(5, 5, PolicyKind::Dense, params));
    env.reset_to(24).unwrap();
    let outcome = env.step(Action::Left).unwrap();
    assert_eq!(outcome.reward_variance, Some(2.5));
}

#[test]
fn sparse_normal_steps_stay_noise_free_even_with_noisy_params() {
    let mut env = env_with(EnvConfig::new(5, 5, PolicyKind::Sparse, noisy_params()));
    env.reset_to(24).unwrap();
    let outcome = env.step(Action::Left).unwrap();
    assert_eq!(outcome.reward_variance, None);
    assert!(close(outcome.reward_noise, 0.0));
}

#[test]
fn sparse_terminal_variance_grows_with_episode_length() {
    let params = RewardParams { rvar_mean_ter: 1.0, rvar_var_ter: 0.0, rvar_mean_step: 0.5, rvar_var_step: 0.0 };
    let mut env = env_with(EnvConfig::new(6, 1, PolicyKind::Sparse, params));
    env.reset_to(4).unwrap();
    let mut last = None;
    for _ in 0..4 {
        last = Some(env.step(Action::Left).unwrap());
    }
    let last = last.unwrap();
    assert_eq!(last.termination, Termination::TerminalReached);
    assert_eq!(last.reward_variance, Some(4.0 * 0.5 + 1.0));
}
