//! Seed the trainee table with the sample trainees.

use checkin_core::models::Trainee;
use checkin_core::storage::EntityRepository;

use super::error::Result;

/// Pure function: One-line summary of a trainee for the seed preview.
pub fn format_trainee(trainee: &Trainee) -> String {
    let status = if trainee.checked_in {
        "checked in"
    } else {
        "checked out"
    };
    format!(
        "{} - {} <{}> at {} ({})",
        trainee.id, trainee.display_name, trainee.email, trainee.location_id, status
    )
}

/// Saves every trainee, returning how many were written.
pub async fn seed_trainees<R>(repository: &R, trainees: &[Trainee]) -> Result<usize>
where
    R: EntityRepository<Trainee> + ?Sized,
{
    for trainee in trainees {
        repository.save(trainee).await?;
        tracing::debug!(trainee_id = %trainee.id, "Seeded trainee");
    }
    Ok(trainees.len())
}
