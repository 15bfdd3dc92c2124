/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.notification, None)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.password_visible, false;
///     model.notification, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for unauthenticated POST requests without body expecting a JSON response.
/// Requires domain parameters for event wrapping. Renders first so the shell
/// can show the pending state while the request is in flight.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The UI shell strips this prefix before sending requests.
///
/// # Example
/// ```ignore
/// unauth_post!(Suggestion, SuggestionEvent, "/suggest-password", SuggestPasswordResponse, "Suggest password",
///     expect_json: SuggestedPassword
/// )
/// ```
#[macro_export]
macro_rules! unauth_post {
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $action:expr, expect_json: $response_type:ty) => {{
        crux_core::Command::all([
            crux_core::render::render(),
            $crate::HttpCmd::post($crate::build_url($endpoint))
                .build()
                .then_send(|result| {
                    let event_result: Result<$response_type, String> =
                        $crate::process_json_response($action, result);
                    $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                        event_result,
                    ))
                }),
        ])
    }};
}
