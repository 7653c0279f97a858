//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::ActiveView;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit immediately (q, Esc, Ctrl+C, signal handler, stdin EOF)
    Quit,

    // ─────────────────────────────────────────────────────────
    // View Messages
    // ─────────────────────────────────────────────────────────
    /// Show a specific view
    SwitchView(ActiveView),

    /// Cycle to the next view (Tab)
    NextView,

    /// Cycle to the previous view (Shift+Tab)
    PreviousView,

    // ─────────────────────────────────────────────────────────
    // Topology Messages
    // ─────────────────────────────────────────────────────────
    /// Make a device the current selection
    SelectDevice { device_id: String },

    /// Flip a port between connected and disconnected
    TogglePort { device_id: String, port_id: String },

    PortCursorUp,
    PortCursorDown,

    /// Toggle the port under the cursor of the selected device
    ToggleSelectedPort,

    DeviceCursorUp,
    DeviceCursorDown,

    /// Select the device under the update view's cursor
    SelectDeviceAtCursor,

    // ─────────────────────────────────────────────────────────
    // Scan Messages
    // ─────────────────────────────────────────────────────────
    /// Begin a simulated QR scan
    StartScan,

    /// Scan timer elapsed
    ScanCompleted { scan_id: u64 },

    // ─────────────────────────────────────────────────────────
    // Registration Form Messages
    // ─────────────────────────────────────────────────────────
    FormNextField,
    FormPreviousField,
    FormInput(char),
    FormBackspace,

    /// "Register Device" pressed. Does not touch the topology.
    FormSubmit,
}
