//! User-facing messages.  The registry's users work in Arabic, so these are returned verbatim in
//! HTTP error bodies and printed by the CLI.

pub const MSG_NAME_REQUIRED: &str = "اسم المالك مطلوب";
pub const MSG_ID_CARD_REQUIRED: &str = "رقم البطاقة مطلوب";
pub const MSG_WALLET_NUMBER_REQUIRED: &str = "رقم المحفظة مطلوب";

pub const MSG_ID_CARD_ALREADY_REGISTERED: &str = "رقم البطاقة مسجل مسبقاً";
pub const MSG_WALLET_NUMBER_ALREADY_REGISTERED: &str = "رقم المحفظة مسجل مسبقاً";

pub const MSG_OWNER_NOT_FOUND: &str = "المالك غير موجود";
pub const MSG_OWNER_CREATED: &str = "تم تسجيل المالك بنجاح";
pub const MSG_OWNER_UPDATED: &str = "تم تحديث بيانات المالك بنجاح";
pub const MSG_OWNER_DELETED: &str = "تم حذف المالك بنجاح";
pub const MSG_SEARCH_QUERY_REQUIRED: &str = "استعلام البحث مطلوب";
pub const MSG_MALFORMED_PAYLOAD: &str = "بيانات غير صالحة";

pub const MSG_LIST_FAILED: &str = "خطأ في جلب بيانات المالكين";
pub const MSG_SEARCH_FAILED: &str = "خطأ في البحث";
pub const MSG_GET_FAILED: &str = "خطأ في جلب بيانات المالك";
pub const MSG_CREATE_FAILED: &str = "خطأ في إنشاء المالك";
pub const MSG_UPDATE_FAILED: &str = "خطأ في تحديث المالك";
pub const MSG_DELETE_FAILED: &str = "خطأ في حذف المالك";

pub const MSG_FETCH_FAILED: &str = "فشل في جلب البيانات";
pub const MSG_NOTHING_TO_EXPORT: &str = "لا توجد بيانات للتصدير";
pub const MSG_EXPORTED: &str = "تم تصدير البيانات بنجاح";
