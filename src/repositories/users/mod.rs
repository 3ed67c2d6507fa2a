//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! - [`user_store`] - 저장소 계약 (`UserStore` trait)
//! - [`memory_user_repo`] - `RwLock<BTreeMap>` 기반 메모리 구현
//! - [`user_repo`] - MongoDB 구현
//!
//! 모든 연산은 호출 단위로 원자적이며, 여러 호출에 걸친 트랜잭션은 없습니다.

pub mod user_store;
pub mod memory_user_repo;
pub mod user_repo;

pub use user_store::UserStore;
pub use memory_user_repo::MemoryUserStore;
pub use user_repo::MongoUserStore;
