use winit::{
    event::{
        ElementState,
        Event,
        KeyboardInput,
        VirtualKeyCode,
        WindowEvent,
    },
    event_loop::ControlFlow,
};
use bui::renderer;
use log::{error, info, warn};
use std::{
    thread,
    time::{
        Duration,
        Instant,
    },
};

use star_field::{
    config::{MAX_PARTICLES, TARGET_FPS},
    Error,
    StarField,
    StarFieldConfig,
    WindowSurface,
};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init()?;

    let event_loop = winit::event_loop::EventLoop::new();
    let window = winit::window::WindowBuilder::new()
        .with_title("Star Field")
        .build(&event_loop)?;
    let mut renderer = futures::executor::block_on(renderer::Renderer::new(&window));

    let surface = WindowSurface::new(&renderer, window.inner_size(), MAX_PARTICLES);
    let mut field = StarField::with_config(StarFieldConfig::default());
    field.start(Some(surface));
    // Holds the surface after Escape so repaints still clear the window.
    let mut released: Option<WindowSurface> = None;
    info!("{} stars on a {}x{} window", field.particles().len(), field.size().width, field.size().height);

    let mut last_frame_time = Instant::now();
    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit
            },
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                match event {
                    WindowEvent::Resized(physical_size) => {
                        renderer.resize(*physical_size);
                        if let Some(surface) = field.surface_mut().or(released.as_mut()) {
                            surface.set_layout_size(*physical_size);
                        }
                        field.resize();
                    },
                    WindowEvent::ScaleFactorChanged {
                        new_inner_size,
                        ..
                    } => {
                        renderer.resize(**new_inner_size);
                        if let Some(surface) = field.surface_mut().or(released.as_mut()) {
                            surface.set_layout_size(**new_inner_size);
                        }
                        field.resize();
                    },
                    WindowEvent::KeyboardInput {
                        input: KeyboardInput {
                            virtual_keycode: Some(VirtualKeyCode::Escape),
                            state: ElementState::Pressed,
                            ..
                        },
                        ..
                    } => {
                        if let Some(mut surface) = field.stop() {
                            info!("Star field stopped");
                            surface.clear();
                            released = Some(surface);
                            window.request_redraw();
                        }
                    },
                    _ => {}
                }
            },
            Event::RedrawRequested(_) => {
                let animating = field.frame();
                let surface = if animating { field.surface_mut() } else { released.as_mut() };
                let surface = match surface {
                    Some(surface) => surface,
                    None => return,
                };
                match renderer.surface().get_current_texture() {
                    Ok(surface_texture) => {
                        let view = surface_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
                        let mut encoder = renderer.device().create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("Star field encoder"),
                        });
                        surface.present(&renderer, &mut encoder, &view);
                        renderer.queue().submit(std::iter::once(encoder.finish()));
                        surface_texture.present();
                    },
                    Err(wgpu::SurfaceError::Lost) => {
                        warn!("Surface lost!");
                        renderer.reconfigure();
                    },
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        error!("Out of memory!");
                        *control_flow = ControlFlow::Exit;
                    },
                    Err(e) => {
                        warn!("Surface error: {:?}", e);
                    },
                };
                if animating {
                    thread::sleep(Duration::from_secs_f32(1.0/TARGET_FPS).saturating_sub(last_frame_time.elapsed()));
                    last_frame_time = Instant::now();
                    window.request_redraw();
                }
            },
            _ => ()
        }
    });
}
