use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Auth context provider. Restores the session from localStorage on mount:
/// validates the stored access token against /me, falls back to the
/// refresh token, clears everything when both fail.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let auth_state = RwSignal::new(AuthState::default());

    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                return;
            };
            match api::get_current_user(&access_token).await {
                Ok(user_info) => {
                    auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                    });
                }
                Err(_) => {
                    let Some(refresh_token) = storage::get_refresh_token() else {
                        storage::clear_tokens();
                        return;
                    };
                    match api::refresh_token(refresh_token).await {
                        Ok(response) => {
                            storage::save_access_token(&response.access_token);
                            if let Ok(user_info) =
                                api::get_current_user(&response.access_token).await
                            {
                                auth_state.set(AuthState {
                                    access_token: Some(response.access_token),
                                    user_info: Some(user_info),
                                });
                            }
                        }
                        Err(_) => {
                            storage::clear_tokens();
                        }
                    }
                }
            }
        });
    });

    provide_context(auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// Perform login and seed the auth context
pub async fn do_login(
    auth_state: RwSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(username, password)
        .await
        .map_err(|e| e.to_string())?;

    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&response.refresh_token);

    auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });

    Ok(())
}

/// Perform logout: revoke the refresh token, drop local session state
pub async fn do_logout(auth_state: RwSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        let _ = api::logout(refresh_token).await;
    }
    storage::clear_tokens();
    auth_state.set(AuthState::default());
}
