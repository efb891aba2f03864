//! Board service: roster, task store and status operations.

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info, warn};

use super::{BoardConfig, BoardError, BoardResult, drag::DragState, reconcile_counts};
use crate::board::{
    domain::{
        BoardChange, BoardCounts, BoardEvent, ContainerId, InputKind, MemberId, MemberName, Task,
        TaskId, TaskStatus, TeamMember, TeamRegistry, ValidationError, validate_task_text,
        validate_team_input,
    },
    ports::{BoardObserver, TaskRepository},
};

/// Session state of one task board.
///
/// Every mutating operation runs to completion, reconciles the counts and
/// then notifies subscribed observers. Operations take `&mut self`; the board
/// is driven from a single event loop.
pub struct BoardService<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    config: BoardConfig,
    registry: TeamRegistry,
    repository: R,
    clock: Arc<C>,
    pub(super) drag: DragState,
    counts: BoardCounts,
    observers: Vec<Box<dyn BoardObserver>>,
}

impl<R, C> BoardService<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    /// Creates a board with the default configuration.
    #[must_use]
    pub fn new(repository: R, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, BoardConfig::default())
    }

    /// Creates a board with the given configuration.
    #[must_use]
    pub fn with_config(repository: R, clock: Arc<C>, config: BoardConfig) -> Self {
        let registry = TeamRegistry::new();
        let counts = reconcile_counts(&registry, &repository);
        Self {
            config,
            registry,
            repository,
            clock,
            drag: DragState::default(),
            counts,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for change notifications.
    pub fn subscribe(&mut self, observer: impl BoardObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Validates raw comma-separated input and creates the roster from it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when the input is rejected, or any
    /// error of [`Self::create_team`].
    pub fn create_team_from_input(&mut self, raw: &str) -> BoardResult<Vec<TeamMember>> {
        let names = validate_team_input(raw, &self.config.validation).inspect_err(|err| {
            debug!(%err, "team input rejected");
        })?;
        self.create_team(names)
    }

    /// Creates the roster. Every member starts with no tasks.
    ///
    /// When [`BoardConfig::allow_team_reset`] is set and a roster already
    /// exists, tasks assigned to the previous members are deleted first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when `names` is empty and
    /// [`BoardError::TeamAlreadyCreated`] when a roster exists and resets are
    /// disabled. The board is left unchanged in both cases.
    pub fn create_team(
        &mut self,
        names: impl IntoIterator<Item = MemberName>,
    ) -> BoardResult<Vec<TeamMember>> {
        let roster: Vec<MemberName> = names.into_iter().collect();
        if roster.is_empty() {
            warn!("empty team roster rejected");
            return Err(ValidationError::Empty(InputKind::TeamNames).into());
        }
        if self.registry.is_created() && !self.config.allow_team_reset {
            warn!("team roster already created, rejecting re-creation");
            return Err(BoardError::TeamAlreadyCreated);
        }

        let removed_tasks = self.remove_assigned_tasks();
        if removed_tasks > 0 {
            warn!(removed_tasks, "roster replaced, deleted tasks of previous members");
        }
        self.drag = DragState::default();

        let members = self.registry.create(roster).to_vec();
        info!(members = members.len(), "team roster created");
        self.publish(BoardEvent::TeamCreated {
            members: members.len(),
            removed_tasks,
        });
        Ok(members)
    }

    /// Returns members in roster order.
    #[must_use]
    pub fn members(&self) -> &[TeamMember] {
        self.registry.members()
    }

    /// Returns the team roster.
    #[must_use]
    pub const fn registry(&self) -> &TeamRegistry {
        &self.registry
    }

    /// Validates `raw` and adds an unassigned task to the shared pool.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when the text is rejected, or
    /// [`BoardError::Repository`] when the task cannot be stored.
    pub fn add_task(&mut self, raw: &str) -> BoardResult<Task> {
        let text = validate_task_text(raw, &self.config.validation).inspect_err(|err| {
            debug!(%err, "task text rejected");
        })?;
        let task = Task::new(text, &*self.clock);
        self.repository.store(task.clone())?;
        debug!(task_id = %task.id(), "task added to pool");
        self.publish(BoardEvent::TaskAdded { task: task.id() });
        Ok(task)
    }

    /// Deletes a task from whichever container holds it.
    ///
    /// Returns `None`, without notifying observers, when no task has the
    /// identifier.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let Some(task) = self.repository.remove(id) else {
            debug!(task_id = %id, "delete ignored, task not found");
            return None;
        };
        if self.drag.dragged_task() == Some(id) {
            self.drag = DragState::default();
        }
        debug!(task_id = %id, container = %task.container(), "task deleted");
        self.publish(BoardEvent::TaskDeleted {
            task: id,
            from: task.container(),
        });
        Some(task)
    }

    /// Moves a task to the end of a member's list, also when it is already
    /// assigned to that member.
    ///
    /// The first assignment sets the status to [`TaskStatus::NotStarted`];
    /// moving an already assigned task keeps its status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MemberNotFound`] or [`BoardError::TaskNotFound`]
    /// without changing the board.
    pub fn assign(&mut self, task_id: TaskId, member: MemberId) -> BoardResult<Task> {
        let task = self.require_task(task_id)?;
        self.assign_task(task, member).map(|(task, _)| task)
    }

    /// Assigns an already located task and reports whether its status was
    /// initialized.
    pub(super) fn assign_task(
        &mut self,
        mut task: Task,
        member: MemberId,
    ) -> BoardResult<(Task, bool)> {
        if !self.registry.contains(member) {
            warn!(task_id = %task.id(), member_id = %member, "assignment to unknown member");
            return Err(BoardError::MemberNotFound(member));
        }

        let from = task.container();
        let status_initialized = task.assign_to(member, &*self.clock);
        self.repository.append(task.clone())?;
        debug!(
            task_id = %task.id(),
            from = %from,
            member_id = %member,
            status_initialized,
            "task assigned"
        );
        self.publish(BoardEvent::TaskAssigned {
            task: task.id(),
            from,
            member,
            status_initialized,
        });
        Ok((task, status_initialized))
    }

    /// Changes the status of an assigned task. Any status may follow any
    /// other.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] for unknown tasks and
    /// [`BoardError::Domain`] wrapping `NotAssigned` for pool tasks. The task
    /// is left unchanged.
    pub fn set_status(&mut self, task_id: TaskId, status: TaskStatus) -> BoardResult<Task> {
        let mut task = self.require_task(task_id)?;
        task.set_status(status, &*self.clock).inspect_err(|err| {
            warn!(task_id = %task_id, %err, "status change rejected");
        })?;
        self.repository.update(task.clone())?;
        debug!(task_id = %task_id, status = status.as_str(), "task status changed");
        self.publish(BoardEvent::StatusChanged {
            task: task_id,
            status,
        });
        Ok(task)
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<Task> {
        self.repository.find_by_id(id)
    }

    /// Returns the tasks of one container in display order.
    #[must_use]
    pub fn tasks_in(&self, container: ContainerId) -> Vec<Task> {
        self.repository.list_in(container)
    }

    /// Counts the shared pool by scanning the repository.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.repository.count_in(ContainerId::Pool)
    }

    /// Counts one member's tasks by scanning the repository.
    #[must_use]
    pub fn member_count(&self, member: MemberId) -> usize {
        self.repository.count_in(ContainerId::Member(member))
    }

    /// Recomputes counts and placeholder flags from the repository and
    /// stores them as the displayed counts.
    pub fn reconcile(&mut self) -> &BoardCounts {
        self.counts = reconcile_counts(&self.registry, &self.repository);
        &self.counts
    }

    /// Returns the counts from the last reconcile pass.
    #[must_use]
    pub const fn counts(&self) -> &BoardCounts {
        &self.counts
    }

    pub(super) fn require_task(&self, id: TaskId) -> BoardResult<Task> {
        self.repository
            .find_by_id(id)
            .ok_or(BoardError::TaskNotFound(id))
    }

    /// Reconciles, then hands the change to every observer.
    pub(super) fn publish(&mut self, event: BoardEvent) {
        let counts = self.reconcile().clone();
        let change = BoardChange { event, counts };
        for observer in &mut self.observers {
            observer.on_change(&change);
        }
    }

    pub(super) fn all_tasks(&self) -> Vec<Task> {
        self.repository.list()
    }

    fn remove_assigned_tasks(&mut self) -> usize {
        let assigned: Vec<TaskId> = self
            .repository
            .list()
            .iter()
            .filter(|task| task.assignee().is_some())
            .map(Task::id)
            .collect();
        for id in &assigned {
            self.repository.remove(*id);
        }
        assigned.len()
    }
}
