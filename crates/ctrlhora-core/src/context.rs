use ctrlhora_api_interface::ApiService;
use ctrlhora_config::Config;
use ctrlhora_session_interface::SessionStore;

use crate::{geolocation::GeolocationService, CoreModule};

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub session_store: &'a (dyn SessionStore + 'a),
    pub geolocation_service: &'a (dyn GeolocationService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub mod tests {
    use ctrlhora_api_interface::MockApiService;
    use ctrlhora_config::Config;
    use ctrlhora_models::{GpsPosition, Session};
    use ctrlhora_session_memory::MemorySessionStore;

    use crate::{
        geolocation::{FixedGeolocationService, GeolocationService, UnavailableGeolocationService},
        CoreContext, CoreModule,
    };

    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
        pub session_store: MemorySessionStore,
        pub geolocation_service: Box<dyn GeolocationService>,
    }

    impl CoreContextTest {
        pub fn new() -> Self {
            Self {
                config: Config::from_env_no_version(),
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
                session_store: MemorySessionStore::new(),
                geolocation_service: Box::new(UnavailableGeolocationService),
            }
        }

        /// Start with a stored session.
        pub fn with_session(username: &str, is_admin: bool) -> Self {
            Self {
                session_store: MemorySessionStore::with_session(Session {
                    access_token: format!("{username}-token"),
                    token_type: "bearer".into(),
                    username: username.into(),
                    is_admin,
                }),
                ..Self::new()
            }
        }

        pub fn set_position(&mut self, latitude: f64, longitude: f64) {
            let position = GpsPosition::new(latitude, longitude).unwrap();
            self.geolocation_service = Box::new(FixedGeolocationService::new(position));
        }

        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
                session_store: &self.session_store,
                geolocation_service: self.geolocation_service.as_ref(),
            }
        }
    }
}
