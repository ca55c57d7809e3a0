use crate::provider::error::CatalogError;
use rand::Rng;
use rand::seq::index;

/// `[0, population)` 범위에서 서로 다른 인덱스를 `count` 개 비복원 추출한다.
///
/// `count` 가 `window` 를 넘으면 거부한다. 실제 모집단이 `count` 보다 작으면 모집단 전체를
/// 무작위 순서로 돌려준다.
pub fn sample_indices<R>(rng: &mut R, population: usize, count: usize, window: usize) -> Result<Vec<usize>, CatalogError>
where
    R: Rng + ?Sized,
{
    if count > window {
        return Err(CatalogError::InvalidRequest(format!("count {} exceeds window size {}", count, window)));
    }

    let amount = count.min(population);
    Ok(index::sample(rng, population, amount).into_vec())
}
