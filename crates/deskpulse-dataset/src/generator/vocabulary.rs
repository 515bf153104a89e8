//! Word lists used to synthesize names and ticket text.

pub const FIRST_NAMES: &[&str] = &[
    "Aisha", "Ben", "Carla", "Dmitri", "Elena", "Farid", "Grace", "Hiro", "Ines", "Jamal",
    "Kara", "Luis", "Maya", "Noah", "Olga", "Priya", "Quinn", "Rosa", "Sam", "Tariq",
    "Uma", "Victor", "Wen", "Yusuf", "Zoe",
];

pub const LAST_NAMES: &[&str] = &[
    "Adams", "Bauer", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Hughes", "Ivanova",
    "Jensen", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "Okafor", "Patel", "Quintero",
    "Rossi", "Schmidt", "Tanaka", "Usman", "Varga", "Walsh", "Yilmaz", "Zhang",
];

/// Short problem statements per category, used as ticket titles.
pub fn titles_for(category: &str) -> &'static [&'static str] {
    match category {
        "Hardware" => &[
            "Laptop will not power on",
            "Docking station not detecting monitors",
            "Keyboard keys unresponsive",
            "Replacement battery request",
        ],
        "Software" => &[
            "Application crashes on startup",
            "License activation failed",
            "Update stuck at 40 percent",
            "Spreadsheet add-in missing",
        ],
        "Network" => &[
            "VPN disconnects every few minutes",
            "Slow connection on third floor",
            "Cannot reach shared drive",
            "Wi-Fi authentication loop",
        ],
        "Security" => &[
            "Suspicious login alert",
            "Phishing email reported",
            "Antivirus quarantine false positive",
            "Lost badge needs deactivation",
        ],
        "Access" => &[
            "Password reset required",
            "Request access to finance folder",
            "Account locked after failed logins",
            "New starter account setup",
        ],
        "Email" => &[
            "Mailbox over quota",
            "Calendar invites not syncing",
            "Shared mailbox permissions",
            "Outbound mail bouncing",
        ],
        "Printer" => &[
            "Printer jams on duplex",
            "Scan to email not working",
            "Toner replacement",
            "Printer offline for the whole floor",
        ],
        _ => &[
            "Desk phone has no dial tone",
            "Voicemail PIN reset",
            "Softphone audio one-way",
            "Call forwarding setup",
        ],
    }
}

pub const DESCRIPTION_OPENERS: &[&str] = &[
    "Started this morning after a restart.",
    "Happens intermittently since last week.",
    "Affects several people in the team.",
    "User tried the usual troubleshooting steps already.",
    "First noticed during a client meeting.",
];

pub const DESCRIPTION_CLOSERS: &[&str] = &[
    "Please advise on next steps.",
    "Blocking daily work.",
    "Workaround in place for now.",
    "Screenshots available on request.",
    "Needs attention before month-end close.",
];
