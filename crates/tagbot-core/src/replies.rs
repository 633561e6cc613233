//! Fixed user-facing reply texts.

/// Placeholder for members without a usable display name.
pub const DEFAULT_MEMBER_NAME: &str = "Member";

pub const ACTIVATED: &str = "✅ *Auto-Tagger Activated!*\n\n\
I'll tag members when you use /tag command!\n\
Use /help to see all commands.";

pub const WRONG_CHAT_TYPE: &str = "❌ This command only works in groups!";

pub const DEACTIVATED: &str = "🛑 *Auto-Tagger Deactivated!*";

pub const NO_MEMBERS: &str = "No members found to tag!";

pub const TAGGING_FAILED: &str = "❌ Error tagging member!";

pub fn status_text(active: bool) -> String {
    let status = if active { "🟢 Active" } else { "🔴 Inactive" };
    format!(
        "*Bot Status:* {status}\n\n\
Commands:\n\
/start - Activate bot\n\
/stop - Deactivate bot\n\
/tag - Tag random member\n\
/tag [name] - Tag someone\n\
/help - Show help"
    )
}

pub fn help_text() -> &'static str {
    "*🤖 Auto-Tagger Bot Commands*\n\n\
• /start - Activate bot in group\n\
• /stop - Deactivate bot\n\
• /tag - Tag random member\n\
• /tag [name] - Tag specific person\n\
• /status - Check bot status\n\
• /help - Show this menu\n\n\
*Features:*\n\
✨ Hinglish messages\n\
💕 Romantic & funny\n\
🎭 Different every time\n\n\
*Setup:*\n\
1. Add bot to group\n\
2. Make bot admin\n\
3. Send /start"
}
