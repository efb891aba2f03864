//! Count and placeholder reconciliation.

use crate::board::{
    domain::{BoardCounts, ContainerCount, ContainerId, MemberCount, TeamRegistry},
    ports::TaskRepository,
};

/// Recomputes every container count from the repository.
///
/// Counts come from a fresh scan of each container, so running this twice
/// without a mutation in between yields identical results.
pub fn reconcile_counts<R>(registry: &TeamRegistry, repository: &R) -> BoardCounts
where
    R: TaskRepository + ?Sized,
{
    let members = registry
        .members()
        .iter()
        .map(|member| MemberCount {
            member: member.id(),
            count: ContainerCount::from_count(
                repository.count_in(ContainerId::Member(member.id())),
            ),
        })
        .collect();
    let pool = ContainerCount::from_count(repository.count_in(ContainerId::Pool));
    BoardCounts::new(pool, members)
}
