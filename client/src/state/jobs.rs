//! Jobs page state: the loaded list plus the search box and status filter.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use shop::{ParseError, RepairJob, StatusFilter, filter_jobs};

#[derive(Clone, Debug, PartialEq)]
pub struct JobsState {
    pub jobs: Vec<RepairJob>,
    /// True until the simulated fetch delivers the list.
    pub loading: bool,
    pub search: String,
    pub status_filter: StatusFilter,
    pub show_new_job_modal: bool,
}

impl Default for JobsState {
    fn default() -> Self {
        Self {
            jobs: Vec::new(),
            loading: true,
            search: String::new(),
            status_filter: StatusFilter::All,
            show_new_job_modal: false,
        }
    }
}

impl JobsState {
    pub fn finish_loading(&mut self, jobs: Vec<RepairJob>) {
        self.jobs = jobs;
        self.loading = false;
    }

    /// Apply a `<select>` value; an unrecognized value leaves the filter unchanged.
    ///
    /// # Errors
    ///
    /// Returns the parse failure for values that name no status.
    pub fn set_status_filter(&mut self, raw: &str) -> Result<(), ParseError> {
        self.status_filter = raw.parse()?;
        Ok(())
    }

    /// Jobs matching the current search text and status filter, in list order.
    #[must_use]
    pub fn visible(&self) -> Vec<RepairJob> {
        filter_jobs(&self.jobs, &self.search, self.status_filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Loaded, but nothing survives the filters.
    #[must_use]
    pub fn shows_empty_state(&self) -> bool {
        !self.loading && self.visible().is_empty()
    }
}
