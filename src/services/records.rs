//! Generic record operations behind every `/api/{resource}` route.

use crate::auth::AuthenticatedUser;
use crate::domain::Entity;
use crate::domain::types::RecordId;
use crate::forms::{FormError, RecordForms};
use crate::pagination::{PagedResponse, PaginationSettings};
use crate::repository::errors::RepositoryError;
use crate::repository::{EntityReader, EntityWriter};
use crate::services::{ServiceError, ServiceResult, ensure_can_read, ensure_can_write};

fn record_error<E: Entity>(err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::NotFound => ServiceError::NotFound(E::NAME),
        other => ServiceError::Repository(other),
    }
}

fn rejected<E: Entity>(err: FormError) -> ServiceError {
    log::info!("Rejected {} payload: {err}", E::NAME);
    ServiceError::Form(err)
}

/// Returns one page of records matching `filter` together with the total
/// number of matches.
///
/// An absent filter and an empty filter both list every record. The page is
/// fetched before the count, and the two reads are independent.
pub fn list_records<E, R>(
    repo: &R,
    user: &AuthenticatedUser,
    settings: &PaginationSettings,
    page: Option<i64>,
    page_size: Option<i64>,
    filter: Option<E::Filter>,
) -> ServiceResult<PagedResponse<E>>
where
    E: Entity,
    R: EntityReader<E> + ?Sized,
{
    ensure_can_read::<E>(user)?;

    let request = settings.request(page, page_size)?;
    let filter = filter.unwrap_or_default();

    let rows = repo.fetch_page(&request, &filter)?;
    let total_count = repo.count(&filter)?;

    Ok(PagedResponse::new(rows, &request, total_count))
}

pub fn get_record<E, R>(repo: &R, user: &AuthenticatedUser, id: i32) -> ServiceResult<E>
where
    E: Entity,
    R: EntityReader<E> + ?Sized,
{
    ensure_can_read::<E>(user)?;
    let id = RecordId::new(id)?;

    repo.get(id)?.ok_or(ServiceError::NotFound(E::NAME))
}

pub fn create_record<E, R>(repo: &R, user: &AuthenticatedUser, form: E::Form) -> ServiceResult<E>
where
    E: RecordForms,
    R: EntityWriter<E> + ?Sized,
{
    ensure_can_write(user)?;
    let new: E::New = form.try_into().map_err(rejected::<E>)?;

    let created = repo.create(&new)?;
    log::info!("{} created by {}", E::NAME, user.username);
    Ok(created)
}

/// Overwrites every writable field of an existing record.
pub fn replace_record<E, R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: i32,
    form: E::Form,
) -> ServiceResult<E>
where
    E: RecordForms,
    R: EntityWriter<E> + ?Sized,
{
    ensure_can_write(user)?;
    let id = RecordId::new(id)?;
    let replacement: E::New = form.try_into().map_err(rejected::<E>)?;

    repo.update(id, &replacement).map_err(record_error::<E>)
}

pub fn patch_record<E, R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: i32,
    form: E::PatchForm,
) -> ServiceResult<E>
where
    E: RecordForms,
    R: EntityWriter<E> + ?Sized,
{
    ensure_can_write(user)?;
    let id = RecordId::new(id)?;
    let patch: E::Patch = form.try_into().map_err(rejected::<E>)?;

    repo.patch(id, &patch).map_err(record_error::<E>)
}

pub fn delete_record<E, R>(repo: &R, user: &AuthenticatedUser, id: i32) -> ServiceResult<()>
where
    E: Entity,
    R: EntityWriter<E> + ?Sized,
{
    ensure_can_write(user)?;
    let id = RecordId::new(id)?;

    repo.delete(id).map_err(record_error::<E>)?;
    log::info!("{} {id} deleted by {}", E::NAME, user.username);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::Patch;
    use crate::domain::api_user::ApiUser;
    use crate::domain::filter::non_blank;
    use crate::domain::pilot::{NewPilot, Pilot, PilotFilter, PilotPatch};
    use crate::forms::pilot::{PilotForm, PilotPatchForm};
    use crate::pagination::{PageRequest, PaginationError};
    use crate::repository::errors::RepositoryResult;
    use crate::repository::mock::MockPilotRepository;
    use crate::{ADMIN_ROLE, USER_ROLE};

    #[derive(Default)]
    struct MockRepo {
        pilots: RefCell<Vec<Pilot>>,
        reads: RefCell<Vec<&'static str>>,
    }

    impl MockRepo {
        fn with_pilots(count: i32) -> Self {
            let repo = Self::default();
            repo.pilots.replace(
                (1..=count)
                    .map(|id| Pilot {
                        id,
                        first_name: format!("Pilot{id}"),
                        last_name: if id % 2 == 0 { "Kovač" } else { "Horvat" }.into(),
                        date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
                        flying_hours: if id <= 3 { 0 } else { id * 100 },
                        airline_id: 1,
                    })
                    .collect(),
            );
            repo
        }

        fn matching(&self, filter: &PilotFilter) -> Vec<Pilot> {
            let contains = |value: &str, needle: Option<&str>| {
                needle.is_none_or(|n| value.to_lowercase().contains(&n.to_lowercase()))
            };
            self.pilots
                .borrow()
                .iter()
                .filter(|p| contains(&p.first_name, non_blank(&filter.first_name)))
                .filter(|p| contains(&p.last_name, non_blank(&filter.last_name)))
                .filter(|p| filter.flying_hours.is_none_or(|h| p.flying_hours == h))
                .filter(|p| filter.airline_id.is_none_or(|a| p.airline_id == a))
                .cloned()
                .collect()
        }
    }

    impl EntityReader<Pilot> for MockRepo {
        fn get(&self, id: RecordId) -> RepositoryResult<Option<Pilot>> {
            Ok(self.pilots.borrow().iter().find(|p| p.id == id.get()).cloned())
        }

        fn fetch_page(
            &self,
            page: &PageRequest,
            filter: &PilotFilter,
        ) -> RepositoryResult<Vec<Pilot>> {
            self.reads.borrow_mut().push("fetch_page");
            Ok(self
                .matching(filter)
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.page_size())
                .collect())
        }

        fn count(&self, filter: &PilotFilter) -> RepositoryResult<usize> {
            self.reads.borrow_mut().push("count");
            Ok(self.matching(filter).len())
        }
    }

    impl EntityWriter<Pilot> for MockRepo {
        fn create(&self, new: &NewPilot) -> RepositoryResult<Pilot> {
            let mut pilots = self.pilots.borrow_mut();
            let pilot = Pilot {
                id: pilots.len() as i32 + 1,
                first_name: new.first_name.clone(),
                last_name: new.last_name.clone(),
                date_of_birth: new.date_of_birth,
                flying_hours: new.flying_hours,
                airline_id: new.airline_id,
            };
            pilots.push(pilot.clone());
            Ok(pilot)
        }

        fn update(&self, id: RecordId, replacement: &NewPilot) -> RepositoryResult<Pilot> {
            let mut pilots = self.pilots.borrow_mut();
            let pilot = pilots
                .iter_mut()
                .find(|p| p.id == id.get())
                .ok_or(RepositoryError::NotFound)?;
            pilot.first_name = replacement.first_name.clone();
            pilot.last_name = replacement.last_name.clone();
            pilot.date_of_birth = replacement.date_of_birth;
            pilot.flying_hours = replacement.flying_hours;
            pilot.airline_id = replacement.airline_id;
            Ok(pilot.clone())
        }

        fn patch(&self, id: RecordId, patch: &PilotPatch) -> RepositoryResult<Pilot> {
            let mut pilots = self.pilots.borrow_mut();
            let pilot = pilots
                .iter_mut()
                .find(|p| p.id == id.get())
                .ok_or(RepositoryError::NotFound)?;
            if patch.is_noop() {
                return Ok(pilot.clone());
            }
            if let Some(hours) = patch.flying_hours {
                pilot.flying_hours = hours;
            }
            if let Some(last_name) = &patch.last_name {
                pilot.last_name = last_name.clone();
            }
            Ok(pilot.clone())
        }

        fn delete(&self, id: RecordId) -> RepositoryResult<()> {
            let mut pilots = self.pilots.borrow_mut();
            let before = pilots.len();
            pilots.retain(|p| p.id != id.get());
            if pilots.len() == before {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        }
    }

    fn user_with(role: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".into(),
            username: role.to_lowercase(),
            roles: vec![role.to_string()],
            iat: 0,
            exp: 0,
        }
    }

    fn admin() -> AuthenticatedUser {
        user_with(ADMIN_ROLE)
    }

    fn viewer() -> AuthenticatedUser {
        user_with(USER_ROLE)
    }

    fn pilot_form() -> PilotForm {
        PilotForm {
            first_name: "Ana".into(),
            last_name: "Horvat".into(),
            date_of_birth: "1985-06-01".into(),
            flying_hours: 0,
            airline_id: 1,
        }
    }

    fn list(
        repo: &MockRepo,
        page: Option<i64>,
        page_size: Option<i64>,
        filter: Option<PilotFilter>,
    ) -> ServiceResult<PagedResponse<Pilot>> {
        list_records::<Pilot, _>(
            repo,
            &viewer(),
            &PaginationSettings::default(),
            page,
            page_size,
            filter,
        )
    }

    #[test]
    fn third_page_of_forty_five_rows() {
        let repo = MockRepo::with_pilots(45);

        let page = list(&repo, Some(3), Some(20), None).unwrap();

        assert_eq!(page.data.len(), 5);
        assert_eq!(page.data[0].id, 41);
        assert_eq!(page.page_number, 3);
        assert_eq!(page.page_size, 20);
        assert_eq!(page.total_count, 45);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.last_page, 3);
    }

    #[test]
    fn page_is_fetched_before_count() {
        let repo = MockRepo::with_pilots(4);

        list(&repo, None, None, None).unwrap();

        assert_eq!(*repo.reads.borrow(), vec!["fetch_page", "count"]);
    }

    #[test]
    fn missing_parameters_use_first_page_and_default_size() {
        let repo = MockRepo::with_pilots(45);

        let page = list(&repo, None, None, None).unwrap();

        assert_eq!(page.page_number, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.data.len(), 10);
    }

    #[test]
    fn oversized_page_size_is_clamped() {
        let repo = MockRepo::with_pilots(45);

        let page = list(&repo, Some(1), Some(500), None).unwrap();

        assert_eq!(page.page_size, 50);
        assert_eq!(page.data.len(), 45);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn invalid_window_is_rejected_before_reading() {
        let repo = MockRepo::with_pilots(3);

        let result = list(&repo, Some(0), Some(10), None);

        assert!(matches!(
            result,
            Err(ServiceError::Pagination(PaginationError::InvalidPage))
        ));
        assert!(repo.reads.borrow().is_empty());
    }

    #[test]
    fn blank_filter_matches_absent_filter() {
        let repo = MockRepo::with_pilots(12);
        let blank = PilotFilter {
            first_name: Some(String::new()),
            last_name: Some("   ".into()),
            ..PilotFilter::default()
        };

        let unfiltered = list(&repo, Some(1), Some(5), None).unwrap();
        let filtered = list(&repo, Some(1), Some(5), Some(blank)).unwrap();

        assert_eq!(unfiltered, filtered);
    }

    #[test]
    fn zero_flying_hours_filters_rows() {
        let repo = MockRepo::with_pilots(12);
        let filter = PilotFilter {
            flying_hours: Some(0),
            ..PilotFilter::default()
        };

        let page = list(&repo, Some(1), Some(10), Some(filter)).unwrap();

        assert_eq!(page.total_count, 3);
        assert!(page.data.iter().all(|p| p.flying_hours == 0));
    }

    #[test]
    fn page_past_the_end_is_empty_but_counted() {
        let repo = MockRepo::with_pilots(45);

        let page = list(&repo, Some(9), Some(20), None).unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.total_count, 45);
        assert_eq!(page.last_page, 3);
    }

    #[test]
    fn users_cannot_list_api_users() {
        struct NoUsers;

        impl EntityReader<ApiUser> for NoUsers {
            fn get(&self, _id: RecordId) -> RepositoryResult<Option<ApiUser>> {
                Ok(None)
            }

            fn fetch_page(
                &self,
                _page: &PageRequest,
                _filter: &crate::domain::api_user::ApiUserFilter,
            ) -> RepositoryResult<Vec<ApiUser>> {
                Ok(Vec::new())
            }

            fn count(
                &self,
                _filter: &crate::domain::api_user::ApiUserFilter,
            ) -> RepositoryResult<usize> {
                Ok(0)
            }
        }

        let settings = PaginationSettings::default();
        let denied =
            list_records::<ApiUser, _>(&NoUsers, &viewer(), &settings, None, None, None);
        let allowed =
            list_records::<ApiUser, _>(&NoUsers, &admin(), &settings, None, None, None).unwrap();

        assert!(matches!(denied, Err(ServiceError::Forbidden)));
        assert_eq!(allowed.total_count, 0);
        assert_eq!(allowed.total_pages, 0);
        assert_eq!(allowed.last_page, 0);
    }

    #[test]
    fn users_without_roles_cannot_read() {
        let repo = MockRepo::with_pilots(1);

        let result = get_record::<Pilot, _>(&repo, &user_with("guest"), 1);

        assert!(matches!(result, Err(ServiceError::Forbidden)));
    }

    #[test]
    fn get_reports_missing_record() {
        let repo = MockRepo::with_pilots(1);

        let result = get_record::<Pilot, _>(&repo, &viewer(), 2);

        assert!(matches!(result, Err(ServiceError::NotFound("pilot"))));
    }

    #[test]
    fn non_positive_id_is_rejected() {
        let repo = MockRepo::with_pilots(1);

        let result = get_record::<Pilot, _>(&repo, &viewer(), 0);

        assert!(matches!(result, Err(ServiceError::TypeConstraint(_))));
    }

    #[test]
    fn create_requires_admin_role() {
        let repo = MockRepo::default();

        let result = create_record::<Pilot, _>(&repo, &viewer(), pilot_form());

        assert!(matches!(result, Err(ServiceError::Forbidden)));
        assert!(repo.pilots.borrow().is_empty());
    }

    #[test]
    fn create_stores_validated_pilot() {
        let repo = MockRepo::default();

        let created = create_record::<Pilot, _>(&repo, &admin(), pilot_form()).unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.flying_hours, 0);
        assert_eq!(repo.pilots.borrow().len(), 1);
    }

    #[test]
    fn create_rejects_invalid_form() {
        let repo = MockRepo::default();
        let mut form = pilot_form();
        form.flying_hours = -5;

        let result = create_record::<Pilot, _>(&repo, &admin(), form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn replace_missing_record_is_not_found() {
        let repo = MockRepo::default();

        let result = replace_record::<Pilot, _>(&repo, &admin(), 3, pilot_form());

        assert!(matches!(result, Err(ServiceError::NotFound("pilot"))));
    }

    #[test]
    fn empty_patch_returns_current_record() {
        let repo = MockRepo::with_pilots(2);
        let before = repo.pilots.borrow()[1].clone();

        let patched =
            patch_record::<Pilot, _>(&repo, &admin(), 2, PilotPatchForm::default()).unwrap();

        assert_eq!(patched, before);
    }

    #[test]
    fn patch_changes_only_given_fields() {
        let repo = MockRepo::with_pilots(2);
        let form = PilotPatchForm {
            flying_hours: Some(1500),
            ..PilotPatchForm::default()
        };

        let patched = patch_record::<Pilot, _>(&repo, &admin(), 1, form).unwrap();

        assert_eq!(patched.flying_hours, 1500);
        assert_eq!(patched.first_name, "Pilot1");
    }

    #[test]
    fn delete_missing_record_is_not_found() {
        let repo = MockRepo::with_pilots(1);

        delete_record::<Pilot, _>(&repo, &admin(), 1).unwrap();
        let second = delete_record::<Pilot, _>(&repo, &admin(), 1);

        assert!(matches!(second, Err(ServiceError::NotFound("pilot"))));
    }

    #[test]
    fn storage_failure_propagates() {
        let mut repo = MockPilotRepository::new();
        repo.expect_fetch_page()
            .returning(|_, _| Err(RepositoryError::ConnectionError("pool exhausted".into())));
        repo.expect_count().never();

        let result = list_records::<Pilot, _>(
            &repo,
            &viewer(),
            &PaginationSettings::default(),
            None,
            None,
            None,
        );

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::ConnectionError(_)))
        ));
    }

    #[test]
    fn filter_is_passed_unchanged_to_both_reads() {
        let mut repo = MockPilotRepository::new();
        repo.expect_fetch_page()
            .withf(|page, filter| page.offset() == 10 && filter.airline_id == Some(4))
            .returning(|_, _| Ok(Vec::new()));
        repo.expect_count()
            .withf(|filter| filter.airline_id == Some(4))
            .returning(|_| Ok(11));
        let filter = PilotFilter {
            airline_id: Some(4),
            ..PilotFilter::default()
        };

        let page = list_records::<Pilot, _>(
            &repo,
            &viewer(),
            &PaginationSettings::default(),
            Some(2),
            None,
            Some(filter),
        )
        .unwrap();

        assert_eq!(page.total_count, 11);
        assert_eq!(page.total_pages, 2);
    }
}
