use anyhow::{Context, Result};
use raw_window_handle::{RawDisplayHandle, RawWindowHandle};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{AtomEnum, ConnectionExt as _, PropMode};
use x11rb::wrapper::ConnectionExt as _;

use super::WindowHints;

const NET_WM_STATE: &[u8] = b"_NET_WM_STATE";
const NET_WM_STATE_FULLSCREEN: &[u8] = b"_NET_WM_STATE_FULLSCREEN";
const HILDON_NON_COMPOSITED_WINDOW: &[u8] = b"_HILDON_NON_COMPOSITED_WINDOW";

pub(crate) fn is_x11(display: RawDisplayHandle) -> bool {
    matches!(display, RawDisplayHandle::Xlib(_) | RawDisplayHandle::Xcb(_))
}

/// X11 window id behind a raw handle, if it is an X11 window.
pub(crate) fn window_id(handle: RawWindowHandle) -> Option<u32> {
    match handle {
        RawWindowHandle::Xlib(h) => u32::try_from(h.window).ok(),
        RawWindowHandle::Xcb(h) => Some(h.window.get()),
        _ => None,
    }
}

/// Writes the requested hint properties on `window`.
///
/// Uses a second connection to the server named by `$DISPLAY`; properties
/// are server-side state, so any client may set them. Each request is
/// checked, so the properties are in place when this returns. Must run
/// before the window is mapped for `_NET_WM_STATE` to be honored.
pub(crate) fn apply_hints(window: u32, hints: WindowHints) -> Result<()> {
    if !hints.any() {
        return Ok(());
    }

    let (conn, _screen) = x11rb::connect(None).context("cannot connect to X server")?;

    if hints.net_wm_fullscreen {
        let wm_state = intern(&conn, NET_WM_STATE)?;
        let fullscreen = intern(&conn, NET_WM_STATE_FULLSCREEN)?;
        conn.change_property32(PropMode::REPLACE, window, wm_state, AtomEnum::ATOM, &[fullscreen])
            .context("failed to set _NET_WM_STATE")?
            .check()
            .context("failed to set _NET_WM_STATE")?;
    }

    if hints.hildon_non_composited {
        let non_composited = intern(&conn, HILDON_NON_COMPOSITED_WINDOW)?;
        conn.change_property32(PropMode::REPLACE, window, non_composited, AtomEnum::INTEGER, &[1])
            .context("failed to set _HILDON_NON_COMPOSITED_WINDOW")?
            .check()
            .context("failed to set _HILDON_NON_COMPOSITED_WINDOW")?;
    }

    log::debug!("applied X11 window hints {hints:?} to window 0x{window:x}");
    Ok(())
}

fn intern(conn: &impl Connection, name: &[u8]) -> Result<u32> {
    let atom = conn
        .intern_atom(false, name)
        .with_context(|| format!("InternAtom {} failed", String::from_utf8_lossy(name)))?
        .reply()
        .with_context(|| format!("InternAtom {} failed", String::from_utf8_lossy(name)))?
        .atom;
    Ok(atom)
}
