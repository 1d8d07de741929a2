//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::pilot::{NewPilot, Pilot, PilotFilter, PilotPatch};
use crate::domain::types::RecordId;
use crate::pagination::PageRequest;
use crate::repository::errors::RepositoryResult;
use crate::repository::{EntityReader, EntityWriter};

mock! {
    pub PilotRepository {}

    impl EntityReader<Pilot> for PilotRepository {
        fn get(&self, id: RecordId) -> RepositoryResult<Option<Pilot>>;
        fn fetch_page(&self, page: &PageRequest, filter: &PilotFilter) -> RepositoryResult<Vec<Pilot>>;
        fn count(&self, filter: &PilotFilter) -> RepositoryResult<usize>;
    }

    impl EntityWriter<Pilot> for PilotRepository {
        fn create(&self, new: &NewPilot) -> RepositoryResult<Pilot>;
        fn update(&self, id: RecordId, replacement: &NewPilot) -> RepositoryResult<Pilot>;
        fn patch(&self, id: RecordId, patch: &PilotPatch) -> RepositoryResult<Pilot>;
        fn delete(&self, id: RecordId) -> RepositoryResult<()>;
    }
}
