use crate::models::Activity;
use crate::registry::ActivityRegistry;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub struct AppStateInner {
    pub registry: ActivityRegistry,
    /// 报名时是否检查 max_participants
    pub enforce_capacity: bool,
}

pub type AppState = Arc<Mutex<AppStateInner>>;

pub fn new_state(activities: Vec<Activity>, enforce_capacity: bool) -> AppState {
    Arc::new(Mutex::new(AppStateInner {
        registry: ActivityRegistry::new(activities),
        enforce_capacity,
    }))
}

/// 获取全局锁；每次变更都是单次 push/remove，锁中毒时注册表仍然一致
pub fn lock(state: &AppState) -> MutexGuard<'_, AppStateInner> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
