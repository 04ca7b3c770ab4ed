//! Team selection as a [`GaProblem`].

use rand::seq::{index, IndexedRandom};
use rand::Rng;

use super::seeding::{PopulationInitializer, SeedingIssue};
use crate::evaluation::FitnessEvaluator;
use crate::ga::GaProblem;
use crate::roster::{Candidate, EligiblePool, Role, Team, TEAM_SIZE};

/// Slots exchanged per crossover.
const CROSSOVER_POINTS: usize = 2;

/// The GA problem for one request: seeding, fitness and variation over
/// teams drawn from a single eligible pool.
#[derive(Debug, Clone)]
pub struct TeamProblem<'a> {
    initializer: PopulationInitializer<'a>,
    evaluator: FitnessEvaluator<'a>,
}

impl<'a> TeamProblem<'a> {
    pub fn new(initializer: PopulationInitializer<'a>, evaluator: FitnessEvaluator<'a>) -> Self {
        Self {
            initializer,
            evaluator,
        }
    }

    pub fn pool(&self) -> &EligiblePool<'a> {
        self.initializer.pool()
    }

    pub fn evaluator(&self) -> &FitnessEvaluator<'a> {
        &self.evaluator
    }
}

impl GaProblem for TeamProblem<'_> {
    type Individual = Team;
    type SeedError = SeedingIssue;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Result<Team, SeedingIssue> {
        self.initializer.build_team(rng)
    }

    fn evaluate(&self, team: &Team) -> f64 {
        self.evaluator.fitness(team)
    }

    fn is_valid(&self, team: &Team) -> bool {
        team.is_structurally_valid()
    }

    fn crossover<R: Rng>(&self, parent1: &Team, parent2: &Team, rng: &mut R) -> Vec<Team> {
        let (a, b) = crossover_teams(parent1, parent2, rng);
        vec![a, b]
    }

    fn mutate<R: Rng>(&self, team: &mut Team, rng: &mut R) {
        mutate_team(team, self.pool(), rng);
    }

    fn on_generation(&self, generation: usize, best_fitness: f64) {
        tracing::debug!(generation, best_fitness, "generation evaluated");
    }
}

/// Two-point slot exchange.
///
/// Picks two distinct positions and swaps the occupants of each between
/// copies of the parents. A swap that would put the same candidate twice
/// into either child is skipped. Role tags stay with the position.
pub fn crossover_teams<R: Rng + ?Sized>(parent1: &Team, parent2: &Team, rng: &mut R) -> (Team, Team) {
    let mut a = parent1.clone();
    let mut b = parent2.clone();
    for i in index::sample(rng, TEAM_SIZE, CROSSOVER_POINTS).iter() {
        a.exchange_occupants(&mut b, i);
    }
    (a, b)
}

/// Replaces the occupant of one random slot with a random eligible
/// outsider from `pool`.
///
/// Returns `false`, leaving the team as it was, when nobody else in the
/// pool can fill that slot's role.
pub fn mutate_team<R: Rng + ?Sized>(team: &mut Team, pool: &EligiblePool<'_>, rng: &mut R) -> bool {
    let index = rng.random_range(0..TEAM_SIZE);
    let role = Role::ALL[index];
    let options: Vec<&Candidate> = pool
        .members()
        .iter()
        .copied()
        .filter(|c| c.can_fill(role) && !team.contains(c.id))
        .collect();
    match options.choose(rng) {
        Some(c) => team.replace_occupant(index, c),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{ChemistryModel, FitnessConfig};
    use crate::random::create_rng;
    use crate::roster::{Catalog, ConstraintFilter, Constraints, Slot};
    use proptest::prelude::*;

    fn cand(id: u64, roles: &[Role]) -> Candidate {
        Candidate::new(id, format!("p{id}")).with_roles(roles)
    }

    fn team(ids: [u64; 5]) -> Team {
        let all = [Role::Duelist, Role::Initiator, Role::Controller, Role::Sentinel];
        let slots = Role::ALL
            .into_iter()
            .zip(ids)
            .map(|(role, id)| Slot::assign(&cand(id, &all), role))
            .collect();
        Team::new(slots).unwrap()
    }

    fn wide_catalog() -> Catalog {
        let all = [Role::Duelist, Role::Initiator, Role::Controller, Role::Sentinel];
        (1..=10).map(|id| cand(id, &all)).collect()
    }

    #[test]
    fn test_crossover_disjoint_parents() {
        let p1 = team([1, 2, 3, 4, 5]);
        let p2 = team([6, 7, 8, 9, 10]);
        let (a, b) = crossover_teams(&p1, &p2, &mut create_rng(3));

        let swapped: Vec<usize> = (0..TEAM_SIZE).filter(|&i| a.ids()[i] != p1.ids()[i]).collect();
        assert_eq!(swapped.len(), 2);
        for i in swapped {
            assert_eq!(a.ids()[i], p2.ids()[i]);
            assert_eq!(b.ids()[i], p1.ids()[i]);
        }
        assert!(a.is_structurally_valid() && b.is_structurally_valid());
    }

    #[test]
    fn test_crossover_leaves_parents_untouched() {
        let p1 = team([1, 2, 3, 4, 5]);
        let p2 = team([6, 7, 8, 9, 10]);
        let _ = crossover_teams(&p1, &p2, &mut create_rng(3));
        assert_eq!(p1.ids(), [1, 2, 3, 4, 5]);
        assert_eq!(p2.ids(), [6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_mutation_swaps_in_an_outsider() {
        let catalog = wide_catalog();
        let pool = ConstraintFilter::default().eligible_pool(&catalog, &Constraints::default());
        let mut t = team([1, 2, 3, 4, 5]);

        assert!(mutate_team(&mut t, &pool, &mut create_rng(11)));
        let outsiders = t.ids().iter().filter(|&&id| id > 5).count();
        assert_eq!(outsiders, 1);
        assert!(t.is_structurally_valid());
    }

    #[test]
    fn test_mutation_without_replacement_is_noop() {
        let catalog: Catalog = (1..=5).map(|id| cand(id, &[Role::Duelist, Role::Sentinel])).collect();
        let pool = ConstraintFilter::default().eligible_pool(&catalog, &Constraints::default());
        let mut t = team([1, 2, 3, 4, 5]);

        assert!(!mutate_team(&mut t, &pool, &mut create_rng(0)));
        assert_eq!(t.ids(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_mutation_respects_role_eligibility() {
        // Only Sentinels outside the team: any change must land in the Sentinel slot.
        let mut cs = vec![cand(6, &[Role::Sentinel])];
        cs.extend((1..=5).map(|id| cand(id, &[Role::Duelist, Role::Initiator, Role::Controller, Role::Sentinel])));
        let catalog = Catalog::new(cs);
        let pool = ConstraintFilter::default().eligible_pool(&catalog, &Constraints::default());

        for seed in 0..20 {
            let mut t = team([1, 2, 3, 4, 5]);
            if mutate_team(&mut t, &pool, &mut create_rng(seed)) {
                assert_eq!(t.member(Role::Sentinel).id, 6);
            } else {
                assert_eq!(t.ids(), [1, 2, 3, 4, 5]);
            }
        }
    }

    #[test]
    fn test_problem_evaluates_with_evaluator() {
        let catalog = wide_catalog();
        let constraints = Constraints::default();
        let pool = ConstraintFilter::default().eligible_pool(&catalog, &constraints);
        let problem = TeamProblem::new(
            PopulationInitializer::new(pool, &constraints),
            FitnessEvaluator::new(FitnessConfig::default(), ChemistryModel::default(), &constraints),
        );

        let t = problem.create_individual(&mut create_rng(5)).unwrap();
        assert!(problem.is_valid(&t));
        assert_eq!(problem.evaluate(&t), problem.evaluator().fitness(&t));
    }

    proptest! {
        #[test]
        fn prop_crossover_never_duplicates(
            ids1 in prop::sample::subsequence((1u64..=8).collect::<Vec<_>>(), 5).prop_shuffle(),
            ids2 in prop::sample::subsequence((1u64..=8).collect::<Vec<_>>(), 5).prop_shuffle(),
            seed in any::<u64>(),
        ) {
            let p1 = team(ids1.try_into().unwrap());
            let p2 = team(ids2.try_into().unwrap());
            let (a, b) = crossover_teams(&p1, &p2, &mut create_rng(seed));
            prop_assert!(a.is_structurally_valid());
            prop_assert!(b.is_structurally_valid());
        }
    }
}
