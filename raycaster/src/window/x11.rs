use super::*;
use ::x11::glx;
use ::x11::glx::arb;
use ::x11::keysym::*;
use ::x11::xlib;
use anyhow::bail;
use anyhow::Result;
use glow::Context;
use glow::HasContext;
use log::debug;
use log::info;
use std::collections::VecDeque;
use std::ffi::c_int;
use std::ffi::c_void;
use std::ffi::CString;
use std::mem;
use std::ptr;
use std::slice;

pub type GLXCREATECONTEXTATTRIBSARB =
    unsafe extern "C" fn(_: *mut xlib::Display, _: glx::GLXFBConfig, _: glx::GLXContext, _: xlib::Bool, _: *const c_int) -> glx::GLXContext;
// Xlib.h `QueuedAfterReading`, not exported by the x11 crate
const QUEUED_AFTER_READING: c_int = 1;

pub type GLXSWAPINTERVALEXT = unsafe extern "C" fn(_: *mut xlib::Display, _: glx::GLXDrawable, _: c_int);

pub struct WindowContextX11 {
    pub window: xlib::Window,
    pub display: *mut xlib::Display,
    pub screen: i32,
    pub size: IVec2,

    colormap: xlib::Colormap,
    glx_context: glx::GLXContext,
    glx_swap_interval_ext: Option<GLXSWAPINTERVALEXT>,
    delete_window_atom: xlib::Atom,
    keyboard_state: Vec<bool>,
    event_queue: VecDeque<InputEvent>,
}

impl WindowContextX11 {
    pub fn new(title: &str, size: IVec2) -> Result<Self> {
        info!("Window initialization");

        unsafe {
            let display = xlib::XOpenDisplay(ptr::null());
            if display.is_null() {
                bail!("Failed to open display");
            }

            let screen = xlib::XDefaultScreen(display);
            let attributes = [
                glx::GLX_X_RENDERABLE,
                1,
                glx::GLX_DRAWABLE_TYPE,
                glx::GLX_WINDOW_BIT,
                glx::GLX_RENDER_TYPE,
                glx::GLX_RGBA_BIT,
                glx::GLX_X_VISUAL_TYPE,
                glx::GLX_TRUE_COLOR,
                glx::GLX_RED_SIZE,
                8,
                glx::GLX_GREEN_SIZE,
                8,
                glx::GLX_BLUE_SIZE,
                8,
                glx::GLX_ALPHA_SIZE,
                8,
                glx::GLX_DOUBLEBUFFER,
                1,
                0,
            ];

            let mut frame_buffers_count = 0;
            let frame_buffer_configs = glx::glXChooseFBConfig(display, screen, attributes.as_ptr(), &mut frame_buffers_count);

            if frame_buffer_configs.is_null() || frame_buffers_count <= 0 {
                bail!("Failed to choose framebuffer config");
            }

            let mut selected = None;
            for config in slice::from_raw_parts(frame_buffer_configs, frame_buffers_count as usize) {
                let visual_info = glx::glXGetVisualFromFBConfig(display, *config);
                if visual_info.is_null() {
                    continue;
                }

                if selected.is_none() && (*visual_info).screen == screen {
                    selected = Some((*config, (*visual_info).visual, (*visual_info).depth));
                }

                xlib::XFree(visual_info as *mut c_void);
            }

            xlib::XFree(frame_buffer_configs as *mut c_void);

            let (frame_buffer_config, visual, depth) = match selected {
                Some(selected) => selected,
                None => bail!("Failed to get visual from framebuffer config"),
            };

            let root = xlib::XRootWindow(display, screen);
            let colormap = xlib::XCreateColormap(display, root, visual, xlib::AllocNone);

            let mut window_attributes: xlib::XSetWindowAttributes = mem::zeroed();
            window_attributes.background_pixel = xlib::XBlackPixel(display, screen);
            window_attributes.border_pixel = xlib::XBlackPixel(display, screen);
            window_attributes.colormap = colormap;
            window_attributes.event_mask = xlib::ExposureMask | xlib::StructureNotifyMask | xlib::KeyPressMask | xlib::KeyReleaseMask;

            let window = xlib::XCreateWindow(
                display,
                root,
                0,
                0,
                size.x as u32,
                size.y as u32,
                0,
                depth,
                xlib::InputOutput as u32,
                visual,
                xlib::CWBackPixel | xlib::CWColormap | xlib::CWBorderPixel | xlib::CWEventMask,
                &mut window_attributes,
            );

            // Equal min and max size tells the window manager the window is not resizable
            let size_hints = xlib::XAllocSizeHints();
            if !size_hints.is_null() {
                (*size_hints).flags = xlib::PMinSize | xlib::PMaxSize;
                (*size_hints).min_width = size.x;
                (*size_hints).min_height = size.y;
                (*size_hints).max_width = size.x;
                (*size_hints).max_height = size.y;

                xlib::XSetWMNormalHints(display, window, size_hints);
                xlib::XFree(size_hints as *mut c_void);
            }

            let delete_window_cstr = CString::new("WM_DELETE_WINDOW")?;
            let mut delete_window_atom = xlib::XInternAtom(display, delete_window_cstr.as_ptr(), xlib::False);
            xlib::XSetWMProtocols(display, window, &mut delete_window_atom, 1);

            let title_cstr = CString::new(title)?;

            xlib::XStoreName(display, window, title_cstr.as_ptr());
            xlib::XClearWindow(display, window);
            xlib::XMapRaised(display, window);

            info!("OpenGL context initialization");

            let glx_create_context_attribs_arb = match load_extension::<GLXCREATECONTEXTATTRIBSARB>("glXCreateContextAttribsARB") {
                Some(extension) => extension,
                None => bail!("Failed to create GLX context (glXCreateContextAttribsARB not available)"),
            };

            let context_attributes = [
                arb::GLX_CONTEXT_MAJOR_VERSION_ARB,
                3,
                arb::GLX_CONTEXT_MINOR_VERSION_ARB,
                3,
                arb::GLX_CONTEXT_FLAGS_ARB,
                arb::GLX_CONTEXT_FORWARD_COMPATIBLE_BIT_ARB,
                0,
            ];

            let glx_context = (glx_create_context_attribs_arb)(display, frame_buffer_config, ptr::null_mut(), xlib::True, context_attributes.as_ptr());
            if glx_context.is_null() {
                bail!("Failed to create GLX context");
            }

            xlib::XSync(display, xlib::False);
            glx::glXMakeCurrent(display, window, glx_context);

            Ok(Self {
                window,
                display,
                screen,
                size,

                colormap,
                glx_context,
                glx_swap_interval_ext: load_extension::<GLXSWAPINTERVALEXT>("glXSwapIntervalEXT"),
                delete_window_atom,
                keyboard_state: vec![false; Key::Unknown as usize],
                event_queue: Default::default(),
            })
        }
    }

    pub fn load_gl_pointers(&self) -> Context {
        unsafe {
            let gl = glow::Context::from_loader_function(|name| {
                let name_cstr = match CString::new(name) {
                    Ok(name_cstr) => name_cstr,
                    Err(_) => return ptr::null(),
                };

                match glx::glXGetProcAddressARB(name_cstr.as_ptr() as *const u8) {
                    Some(proc) => proc as *const c_void,
                    None => {
                        debug!("GL function {} unavailable", name);
                        ptr::null()
                    }
                }
            });

            let version = gl.version();
            info!("OpenGL {}.{} {}", version.major, version.minor, version.vendor_info);

            gl
        }
    }

    pub fn poll_event(&mut self) -> Option<InputEvent> {
        unsafe {
            while xlib::XPending(self.display) > 0 {
                let mut event: xlib::XEvent = mem::zeroed();
                xlib::XNextEvent(self.display, &mut event);

                match event.get_type() {
                    xlib::ConfigureNotify => {
                        let size = IVec2::new(event.configure.width, event.configure.height);
                        if size != self.size {
                            self.event_queue.push_back(InputEvent::WindowSizeChange { size });
                            self.size = size;
                        }
                    }
                    xlib::KeyPress => {
                        let key = map_key(xlib::XLookupKeysym(&mut event.key, 0) as u32);

                        if key != Key::Unknown {
                            let repeat = self.keyboard_state[key as usize];

                            self.event_queue.push_back(InputEvent::KeyPress { key, repeat });
                            self.keyboard_state[key as usize] = true;
                        }
                    }
                    xlib::KeyRelease => {
                        // X11 auto-repeat sends release and press with the same keycode back to back, skip the release
                        if xlib::XEventsQueued(self.display, QUEUED_AFTER_READING) > 0 {
                            let mut next_event: xlib::XEvent = mem::zeroed();
                            xlib::XPeekEvent(self.display, &mut next_event);

                            if next_event.get_type() == xlib::KeyPress && next_event.key.keycode == event.key.keycode {
                                continue;
                            }
                        }

                        let key = map_key(xlib::XLookupKeysym(&mut event.key, 0) as u32);

                        if key != Key::Unknown {
                            self.event_queue.push_back(InputEvent::KeyRelease { key });
                            self.keyboard_state[key as usize] = false;
                        }
                    }
                    xlib::ClientMessage => {
                        if event.client_message.data.get_long(0) as xlib::Atom == self.delete_window_atom {
                            self.event_queue.push_back(InputEvent::WindowClose);
                        }
                    }
                    _ => {}
                }
            }

            self.event_queue.pop_front()
        }
    }

    pub fn set_swap_interval(&self, interval: i32) {
        unsafe {
            if let Some(glx_swap_interval_ext) = self.glx_swap_interval_ext {
                (glx_swap_interval_ext)(self.display, self.window, interval);
            }
        }
    }

    pub fn swap_buffers(&self) {
        unsafe {
            glx::glXSwapBuffers(self.display, self.window);
        }
    }
}

impl Drop for WindowContextX11 {
    fn drop(&mut self) {
        info!("Releasing window");

        unsafe {
            glx::glXMakeCurrent(self.display, 0, ptr::null_mut());
            glx::glXDestroyContext(self.display, self.glx_context);

            xlib::XDestroyWindow(self.display, self.window);
            xlib::XFreeColormap(self.display, self.colormap);
            xlib::XCloseDisplay(self.display);
        }
    }
}

fn load_extension<T>(name: &str) -> Option<T> {
    unsafe {
        let extension_cstr = CString::new(name).ok()?;
        let extension_proc = glx::glXGetProcAddressARB(extension_cstr.as_ptr() as *const u8)?;

        Some(mem::transmute_copy::<_, T>(&extension_proc))
    }
}

fn map_key(key: u32) -> Key {
    match key {
        XK_Escape => Key::Escape,
        _ => Key::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_keysym_maps_to_escape() {
        assert_eq!(map_key(XK_Escape), Key::Escape);
        assert_eq!(map_key(XK_Return), Key::Unknown);
        assert_eq!(map_key(XK_a), Key::Unknown);
    }
}
