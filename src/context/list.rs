//! Ordered task store.
//!
//! Tasks are kept in a single vector. Every mutating operation except
//! [`TaskList::push`] leaves the vector partitioned: completed tasks first,
//! then uncompleted ones, each block in the relative order it had before.
//!
//! Two numberings exist over the same store:
//! - the *stored* order (completed block first), used by the preview
//! - the *listing* order (uncompleted block first), used by the full listing
//!   and by every command that takes an index from the user

use std::ops::Range;

use thiserror::Error;

use super::Task;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    #[error("task index {index} is out of range (the list has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Borrowed view of a partitioned list.
#[derive(Debug, Clone, Copy)]
pub struct Partition<'a> {
    pub completed: &'a [Task],
    pub uncompleted: &'a [Task],
}

impl<'a> Partition<'a> {
    /// Tasks in listing order paired with their listing index.
    pub fn listing(self) -> impl Iterator<Item = (usize, &'a Task)> {
        self.uncompleted
            .iter()
            .chain(self.completed.iter())
            .enumerate()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in stored order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Indices a user may currently type for a task command.
    pub fn valid_indices(&self) -> Range<usize> {
        0..self.tasks.len()
    }

    /// Append a task at the end of the stored order without re-partitioning.
    ///
    /// Returns the stored index of the new task.
    pub fn push(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len() - 1
    }

    /// Stable partition into completed then uncompleted, written back to the store.
    pub fn partition(&mut self) -> Partition<'_> {
        let (mut completed, uncompleted): (Vec<Task>, Vec<Task>) =
            std::mem::take(&mut self.tasks)
                .into_iter()
                .partition(Task::is_complete);
        completed.extend(uncompleted);
        self.tasks = completed;

        let boundary = self.tasks.iter().take_while(|t| t.is_complete()).count();
        let (completed, uncompleted) = self.tasks.split_at(boundary);
        Partition {
            completed,
            uncompleted,
        }
    }

    /// Set the completion flag of the task at `listing_index`.
    pub fn set_complete(&mut self, listing_index: usize, complete: bool) -> Result<(), ListError> {
        let position = self.resolve(listing_index)?;
        self.tasks[position].complete = complete;
        self.partition();
        Ok(())
    }

    /// Remove and return the task at `listing_index`.
    pub fn remove(&mut self, listing_index: usize) -> Result<Task, ListError> {
        let position = self.resolve(listing_index)?;
        let removed = self.tasks.remove(position);
        self.partition();
        Ok(removed)
    }

    /// Map a listing index to a position in the (freshly partitioned) store.
    fn resolve(&mut self, listing_index: usize) -> Result<usize, ListError> {
        let len = self.tasks.len();
        let partition = self.partition();
        let (done, todo) = (partition.completed.len(), partition.uncompleted.len());

        if listing_index < todo {
            Ok(done + listing_index)
        } else if listing_index < len {
            Ok(listing_index - todo)
        } else {
            Err(ListError::IndexOutOfRange {
                index: listing_index,
                len,
            })
        }
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(label: &str, complete: bool) -> Task {
        Task {
            label: label.to_string(),
            complete,
        }
    }

    fn labels(list: &TaskList) -> Vec<&str> {
        list.tasks().iter().map(|t| t.label.as_str()).collect()
    }

    fn listing(list: &mut TaskList) -> Vec<String> {
        list.partition()
            .listing()
            .map(|(i, t)| format!("[{}] {}", i, t.label))
            .collect()
    }

    #[test]
    fn test_partition_is_stable() {
        let mut list: TaskList = vec![
            task("a", false),
            task("b", true),
            task("c", false),
            task("d", true),
            task("e", false),
        ]
        .into_iter()
        .collect();

        let partition = list.partition();
        assert_eq!(partition.completed.len(), 2);
        assert_eq!(partition.uncompleted.len(), 3);
        assert_eq!(labels(&list), vec!["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn test_partition_on_empty_list() {
        let mut list = TaskList::new();
        let partition = list.partition();
        assert!(partition.completed.is_empty());
        assert!(partition.uncompleted.is_empty());
    }

    #[test]
    fn test_push_appends_without_partitioning() {
        let mut list: TaskList = vec![task("a", false), task("b", true)].into_iter().collect();
        list.partition();
        assert_eq!(labels(&list), vec!["b", "a"]);

        let index = list.push(Task::new("c"));
        assert_eq!(index, 2);
        assert_eq!(labels(&list), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_set_complete_uses_listing_index() {
        let mut list: TaskList = vec![task("a", true), task("b", false), task("c", false)]
            .into_iter()
            .collect();

        // Listing order is b, c, a
        list.set_complete(1, true).unwrap();
        assert_eq!(labels(&list), vec!["a", "c", "b"]);
        assert!(list.tasks()[1].is_complete());
        assert!(!list.tasks()[2].is_complete());
    }

    #[test]
    fn test_set_not_complete_moves_task_to_uncompleted_block() {
        let mut list: TaskList = vec![task("a", true), task("b", true), task("c", false)]
            .into_iter()
            .collect();

        // Listing order is c, a, b
        list.set_complete(1, false).unwrap();
        assert_eq!(labels(&list), vec!["b", "a", "c"]);
        assert!(!list.tasks()[1].is_complete());
    }

    #[test]
    fn test_set_complete_is_idempotent() {
        let mut list: TaskList = vec![task("a", true), task("b", false)].into_iter().collect();
        list.partition();
        let before = list.clone();

        // Listing order is b, a
        list.set_complete(1, true).unwrap();
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_decreases_len_by_one() {
        let mut list: TaskList = vec![task("a", false), task("b", true), task("c", false)]
            .into_iter()
            .collect();

        // Listing order is a, c, b
        let removed = list.remove(2).unwrap();
        assert_eq!(removed.label, "b");
        assert_eq!(list.len(), 2);
        assert_eq!(labels(&list), vec!["a", "c"]);
    }

    #[test]
    fn test_out_of_range_index() {
        let mut list: TaskList = vec![task("a", false)].into_iter().collect();

        assert_eq!(
            list.remove(1),
            Err(ListError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            list.set_complete(5, true),
            Err(ListError::IndexOutOfRange { index: 5, len: 1 })
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_listing_numbers_uncompleted_first() {
        let mut list = TaskList::new();
        list.push(Task::new("Buy milk"));
        list.push(Task::new("Walk dog"));
        assert_eq!(listing(&mut list), vec!["[0] Buy milk", "[1] Walk dog"]);

        list.set_complete(0, true).unwrap();
        assert_eq!(listing(&mut list), vec!["[0] Walk dog", "[1] Buy milk"]);

        list.remove(1).unwrap();
        assert_eq!(listing(&mut list), vec!["[0] Walk dog"]);
    }

    /// Completed block first, and each block keeps the relative order in `expected`.
    fn assert_partitioned(list: &TaskList, expected: &[&str]) {
        let boundary = list.tasks().iter().take_while(|t| t.is_complete()).count();
        assert!(list.tasks()[boundary..].iter().all(|t| !t.is_complete()));

        let in_order = |complete: bool| {
            expected
                .iter()
                .copied()
                .filter(|label| {
                    list.tasks()
                        .iter()
                        .any(|t| t.label == *label && t.is_complete() == complete)
                })
                .collect::<Vec<&str>>()
        };
        let mut want = in_order(true);
        want.extend(in_order(false));
        assert_eq!(labels(list), want);
    }

    #[test]
    fn test_partition_holds_across_mutation_sequence() {
        let mut list = TaskList::new();
        for label in ["a", "b", "c", "d", "e"] {
            list.push(Task::new(label));
        }
        list.partition();
        assert_partitioned(&list, &["a", "b", "c", "d", "e"]);

        // (operation, listing index)
        let steps: [(&str, usize); 8] = [
            ("complete", 2),
            ("complete", 0),
            ("remove", 3),
            ("uncomplete", 3),
            ("complete", 1),
            ("push", 0),
            ("remove", 0),
            ("uncomplete", 3),
        ];

        for (op, index) in steps {
            let before: Vec<String> = list.tasks().iter().map(|t| t.label.clone()).collect();
            match op {
                "complete" => list.set_complete(index, true).unwrap(),
                "uncomplete" => list.set_complete(index, false).unwrap(),
                "remove" => {
                    list.remove(index).unwrap();
                }
                _ => {
                    list.push(Task::new(format!("new{}", before.len())));
                    list.partition();
                }
            }
            let mut order: Vec<&str> = before.iter().map(String::as_str).collect();
            let appended: Vec<String> = list
                .tasks()
                .iter()
                .filter(|t| !before.contains(&t.label))
                .map(|t| t.label.clone())
                .collect();
            order.extend(appended.iter().map(String::as_str));
            assert_partitioned(&list, &order);
        }
    }

    #[test]
    fn test_valid_indices() {
        let mut list = TaskList::new();
        assert!(list.valid_indices().is_empty());

        list.push(Task::new("a"));
        list.push(Task::new("b"));
        assert_eq!(list.valid_indices(), 0..2);
    }
}
