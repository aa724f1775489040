use crate::config::window::{GlProfileKind, WindowConfig};
use crate::render::gl_backend::{gl_version_string, GlBackend};
use crate::utils::error::{BootstrapError, SurfaceError};
use crate::window::surface::{configure_viewport, FrameSurface};
use glutin::{
    config::{Config, ConfigTemplateBuilder},
    context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version},
    display::{Display, GetGlDisplay},
    prelude::*,
    surface::{Surface, SwapInterval, WindowSurface},
};
use glutin_winit::{DisplayBuilder, GlWindow};
use log::{debug, error, info, warn};
use raw_window_handle::HasRawWindowHandle;
use std::{
    ffi::{c_void, CString},
    num::NonZeroU32,
    panic::{self, AssertUnwindSafe},
    ptr,
    time::Duration,
};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{EventLoop, EventLoopBuilder},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowBuilder, WindowId},
};

/// The one window, its GL context and the event loop feeding it.
///
/// Fields drop top to bottom: context, surface, window, then the event loop.
pub struct WindowContext {
    gl_context: PossiblyCurrentContext,
    gl_surface: Surface<WindowSurface>,
    gl_display: Display,
    window: Window,
    event_loop: EventLoop<()>,
    close_requested: bool,
}

pub fn is_close_request(event: &WindowEvent) -> bool {
    matches!(event, WindowEvent::CloseRequested)
}

// Unwind payload for an empty config list; caught in `create`.
struct NoConfigs;

/// The candidate with the most samples; the first one wins ties.
fn select_config<T, F>(candidates: impl Iterator<Item = T>, samples: F) -> Option<T>
where
    F: Fn(&T) -> u8,
{
    candidates.reduce(|best, candidate| {
        if samples(&candidate) > samples(&best) {
            candidate
        } else {
            best
        }
    })
}

fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    match select_config(configs, |config| config.num_samples()) {
        Some(config) => config,
        // The picker has to return a config, so bail out without the panic hook.
        None => panic::resume_unwind(Box::new(NoConfigs)),
    }
}

/// Whether `event` asks the window `window_id` to close.
fn closes_window(event: &Event<()>, window_id: WindowId) -> bool {
    match event {
        Event::WindowEvent { window_id: id, event } => *id == window_id && is_close_request(event),
        _ => false,
    }
}

// The loop only exits on its own if the platform shut it down.
fn pump_ended(status: &PumpStatus) -> bool {
    matches!(status, PumpStatus::Exit(_))
}

fn gl_profile(profile: GlProfileKind) -> GlProfile {
    match profile {
        GlProfileKind::Core => GlProfile::Core,
        GlProfileKind::Compatibility => GlProfile::Compatibility,
    }
}

// Entry points the selected profile cannot do without.
fn missing_entry_points(profile: GlProfileKind) -> Vec<&'static str> {
    let mut required = vec![
        ("glViewport", gl::Viewport::is_loaded()),
        ("glClearColor", gl::ClearColor::is_loaded()),
        ("glClear", gl::Clear::is_loaded()),
        ("glGetString", gl::GetString::is_loaded()),
    ];
    if profile == GlProfileKind::Core {
        required.extend([
            ("glCreateShader", gl::CreateShader::is_loaded()),
            ("glLinkProgram", gl::LinkProgram::is_loaded()),
            ("glGenVertexArrays", gl::GenVertexArrays::is_loaded()),
            ("glGenBuffers", gl::GenBuffers::is_loaded()),
            ("glVertexAttribPointer", gl::VertexAttribPointer::is_loaded()),
            ("glDrawArrays", gl::DrawArrays::is_loaded()),
        ]);
    }

    required
        .into_iter()
        .filter(|(_, loaded)| !loaded)
        .map(|(name, _)| name)
        .collect()
}

impl WindowContext {
    /// Opens the window, makes its context current, loads the GL bindings and
    /// sets the viewport to the drawable size.
    ///
    /// The returned backend is proof the bindings are loaded. On error the
    /// event loop has already been torn down.
    pub fn initialize(config: &WindowConfig) -> Result<(Self, GlBackend), BootstrapError> {
        Self::create(config).map_err(|e| {
            error!("{}", e);
            e
        })
    }

    fn create(config: &WindowConfig) -> Result<(Self, GlBackend), BootstrapError> {
        let event_loop = EventLoopBuilder::new()
            .build()
            .map_err(|e| BootstrapError::WindowCreation(e.to_string()))?;

        let window_builder = WindowBuilder::new()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(false);

        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let built = panic::catch_unwind(AssertUnwindSafe(|| {
            display_builder.build(&event_loop, ConfigTemplateBuilder::new(), pick_config)
        }))
        .map_err(|payload| match payload.downcast::<NoConfigs>() {
            Ok(_) => BootstrapError::WindowCreation("display offered no OpenGL configs".into()),
            Err(payload) => panic::resume_unwind(payload),
        })?;
        let (window, gl_config) = built.map_err(|e| BootstrapError::WindowCreation(e.to_string()))?;
        let window = window.ok_or_else(|| BootstrapError::WindowCreation("no window was created".into()))?;

        let (major, minor) = config.gl_version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(gl_profile(config.profile))
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(Some(window.raw_window_handle()));

        let gl_display = gl_config.display();
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
            .map_err(|e| BootstrapError::ContextCreation(e.to_string()))?;

        let attrs = window.build_surface_attributes(Default::default());
        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &attrs) }
            .map_err(|e| BootstrapError::ContextCreation(e.to_string()))?;

        let gl_context = not_current
            .make_current(&gl_surface)
            .map_err(|e| BootstrapError::ContextCreation(e.to_string()))?;

        if config.vsync {
            if let Err(e) = gl_surface.set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN)) {
                warn!("Could not enable vsync: {}", e);
            }
        }

        gl::load_with(|symbol| match CString::new(symbol) {
            Ok(symbol) => gl_display.get_proc_address(symbol.as_c_str()),
            Err(_) => ptr::null(),
        });

        let missing = missing_entry_points(config.profile);
        if !missing.is_empty() {
            return Err(BootstrapError::LoaderInit(format!("unresolved {}", missing.join(", "))));
        }

        let context = Self {
            gl_context,
            gl_surface,
            gl_display,
            window,
            event_loop,
            close_requested: false,
        };

        let mut backend = GlBackend::assume_loaded();
        let (width, height) = configure_viewport(&mut backend, &context);

        info!(
            "Window '{}' ready: requested {}x{}, drawable {}x{}",
            config.title, config.width, config.height, width, height
        );
        if let Some(version) = gl_version_string() {
            info!("OpenGL {}", version);
        }

        Ok((context, backend))
    }

    /// Address of a GL entry point in this context, null if the driver lacks it.
    pub fn proc_address(&self, name: &str) -> *const c_void {
        match CString::new(name) {
            Ok(name) => self.gl_display.get_proc_address(name.as_c_str()),
            Err(_) => ptr::null(),
        }
    }
}

impl FrameSurface for WindowContext {
    fn drawable_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn should_close(&self) -> bool {
        self.close_requested
    }

    fn poll_events(&mut self) {
        let window_id = self.window.id();
        let mut close_requested = false;

        let status = self.event_loop.pump_events(Some(Duration::ZERO), |event, _| {
            if closes_window(&event, window_id) {
                close_requested = true;
            }
        });

        if pump_ended(&status) {
            if let PumpStatus::Exit(code) = status {
                debug!("Event loop exited: Exit({})", code);
            }
            close_requested = true;
        }

        if close_requested && !self.close_requested {
            info!("Close requested");
            self.close_requested = true;
        }
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.gl_surface
            .swap_buffers(&self.gl_context)
            .map_err(|e| SurfaceError::Present(e.to_string()))
    }
}
