use tauri::{webview::PageLoadEvent, Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_shutdown_log, append_startup_log, logging, menu_handler,
    menu_setup, permission_bridge, permission_prompt, runtime_paths, shell_locale, tray_setup,
    webview_setup, window_actions, SettingsState, ShellState, DESKTOP_LOG_FILE,
    MAIN_WINDOW_LABEL,
};

pub(crate) fn run() {
    let root_dir = runtime_paths::default_root_dir();

    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(root_dir.clone(), DESKTOP_LOG_FILE).display()
    ));
    append_startup_log(&format!(
        "shell locale: {}",
        shell_locale::current_shell_locale()
    ));

    let settings_state = SettingsState::load(root_dir, append_startup_log);

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _args, _cwd| {
            // A second launch surfaces the running shell instead of starting
            // another one.
            append_desktop_log("second instance detected, showing main window");
            window_actions::show_main_window(app_handle, append_desktop_log);
        }))
        .plugin(tauri_plugin_dialog::init())
        .manage(ShellState::default())
        .manage(settings_state)
        .on_menu_event(|app_handle, event| {
            menu_handler::handle_menu_event(app_handle, event.id().as_ref())
        })
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            if let WindowEvent::CloseRequested { api, .. } = event {
                let app_handle = window.app_handle();
                let shell = app_handle.state::<ShellState>();
                let close_to_tray = app_handle
                    .state::<SettingsState>()
                    .snapshot()
                    .close_to_tray;

                match window_actions::decide_close_requested(close_to_tray, shell.is_quitting()) {
                    window_actions::CloseRequestedDecision::HideToTray => {
                        api.prevent_close();
                        window_actions::hide_main_window(app_handle, append_desktop_log);
                    }
                    window_actions::CloseRequestedDecision::AllowClose => {
                        shell.mark_quitting();
                    }
                }
            }
        })
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                append_desktop_log(&format!("page-load started: {}", payload.url()));
            }
            PageLoadEvent::Finished => {
                append_desktop_log(&format!("page-load finished: {}", payload.url()));
                if webview.label() != MAIN_WINDOW_LABEL {
                    return;
                }

                let app_handle = webview.app_handle();
                let stored_choice = app_handle
                    .state::<SettingsState>()
                    .snapshot()
                    .allow_permissions;
                match permission_prompt::decide_permission_prompt(stored_choice) {
                    permission_prompt::PermissionPromptDecision::Prompt => {
                        permission_prompt::prompt_notification_permission(app_handle.clone());
                    }
                    permission_prompt::PermissionPromptDecision::AlreadyAnswered => {
                        if let Some(allowed) = stored_choice {
                            let script = permission_bridge::notification_bridge_script(allowed);
                            if let Err(error) = webview.eval(&script) {
                                append_desktop_log(&format!(
                                    "failed to inject notification bridge: {error}"
                                ));
                            }
                        }
                    }
                }
            }
        })
        .setup(move |app| {
            let app_handle = app.handle().clone();

            webview_setup::build_main_window(&app_handle)
                .map_err(|error| -> Box<dyn std::error::Error> {
                    append_startup_log(&format!("failed to create main window: {error}"));
                    error.into()
                })?;

            if let Err(error) = menu_setup::setup_menu(&app_handle) {
                append_startup_log(&format!("failed to initialize app menu: {error}"));
            }
            if let Err(error) = tray_setup::setup_tray(&app_handle) {
                append_startup_log(&format!("failed to initialize tray: {error}"));
            }

            append_startup_log("main window, menu and tray ready");
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { api, .. } => {
                let shell = app_handle.state::<ShellState>();
                if !shell.is_quitting() {
                    // The tray keeps the shell alive while the window is hidden.
                    api.prevent_exit();
                }
            }
            RunEvent::Exit => {
                append_shutdown_log("desktop process exiting");
            }
            _ => {}
        });
}
