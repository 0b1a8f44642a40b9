//! Bilingual message table
//!
//! Every failure a rule can report is a [`FailureReason`]. Messages are
//! looked up by `(reason, locale)` in a single exhaustive `match`, so adding
//! a reason without translating it does not compile.

use crate::locale::Locale;

/// Why a value was rejected. One variant per (kind, failure) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    Required,
    InvalidEmail,
    InvalidSaudiPhone,
    InvalidPhone,
    WeakPassword,
    SmsCodeLength { expected: usize },
    SmsCodeDigitsOnly,
    NationalIdLength,
    NationalIdChecksum,
    IqamaLength,
    IqamaPrefix,
    NameTooShort { min: usize },
    NameInvalidCharacters,
    Underage { min_age: u32 },
    InvalidDate,
}

impl FailureReason {
    /// Machine-readable code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::Required => "required",
            FailureReason::InvalidEmail => "invalid_email",
            FailureReason::InvalidSaudiPhone => "invalid_saudi_phone",
            FailureReason::InvalidPhone => "invalid_phone",
            FailureReason::WeakPassword => "weak_password",
            FailureReason::SmsCodeLength { .. } => "sms_code_length",
            FailureReason::SmsCodeDigitsOnly => "sms_code_digits_only",
            FailureReason::NationalIdLength => "national_id_length",
            FailureReason::NationalIdChecksum => "national_id_checksum",
            FailureReason::IqamaLength => "iqama_length",
            FailureReason::IqamaPrefix => "iqama_prefix",
            FailureReason::NameTooShort { .. } => "name_too_short",
            FailureReason::NameInvalidCharacters => "name_invalid_characters",
            FailureReason::Underage { .. } => "underage",
            FailureReason::InvalidDate => "invalid_date",
        }
    }

    /// Render the message for `locale`.
    ///
    /// `field_name` only affects [`FailureReason::Required`], which becomes
    /// "<field> is required" instead of the generic sentence.
    pub fn message(&self, locale: Locale, field_name: Option<&str>) -> String {
        use FailureReason::*;
        use Locale::*;

        match (self, locale) {
            (Required, English) => match field_name {
                Some(field) => format!("{} is required", field),
                None => "This field is required".to_string(),
            },
            (Required, Arabic) => match field_name {
                Some(field) => format!("{} مطلوب", field),
                None => "هذا الحقل مطلوب".to_string(),
            },

            (InvalidEmail, English) => "Please enter a valid email address".to_string(),
            (InvalidEmail, Arabic) => "يرجى إدخال بريد إلكتروني صحيح".to_string(),

            (InvalidSaudiPhone, English) => "Please enter a valid Saudi phone number".to_string(),
            (InvalidSaudiPhone, Arabic) => "يرجى إدخال رقم جوال سعودي صحيح".to_string(),

            (InvalidPhone, English) => "Please enter a valid phone number".to_string(),
            (InvalidPhone, Arabic) => "يرجى إدخال رقم هاتف صحيح".to_string(),

            (WeakPassword, English) => "Password must be at least 8 characters and include \
                 uppercase and lowercase letters, a number and a special character"
                .to_string(),
            (WeakPassword, Arabic) => "كلمة المرور يجب أن تكون 8 أحرف على الأقل وتحتوي على \
                 حروف كبيرة وصغيرة ورقم ورمز خاص"
                .to_string(),

            (SmsCodeLength { expected }, English) => {
                format!("Verification code must be {} digits", expected)
            }
            (SmsCodeLength { expected }, Arabic) => {
                format!("رمز التحقق يجب أن يتكون من {} أرقام", expected)
            }

            (SmsCodeDigitsOnly, English) => {
                "Verification code must contain digits only".to_string()
            }
            (SmsCodeDigitsOnly, Arabic) => "رمز التحقق يجب أن يحتوي على أرقام فقط".to_string(),

            (NationalIdLength, English) => "National ID must be 10 digits".to_string(),
            (NationalIdLength, Arabic) => "رقم الهوية الوطنية يجب أن يتكون من 10 أرقام".to_string(),

            (NationalIdChecksum, English) => "Invalid National ID number".to_string(),
            (NationalIdChecksum, Arabic) => "رقم الهوية الوطنية غير صحيح".to_string(),

            (IqamaLength, English) => "Iqama number must be 10 digits".to_string(),
            (IqamaLength, Arabic) => "رقم الإقامة يجب أن يتكون من 10 أرقام".to_string(),

            (IqamaPrefix, English) => "Iqama number must start with 1 or 2".to_string(),
            (IqamaPrefix, Arabic) => "رقم الإقامة يجب أن يبدأ بالرقم 1 أو 2".to_string(),

            (NameTooShort { min }, English) => {
                format!("Name must be at least {} characters", min)
            }
            (NameTooShort { min }, Arabic) => {
                format!("الاسم يجب أن يتكون من {} أحرف على الأقل", min)
            }

            (NameInvalidCharacters, English) => {
                "Name may only contain letters, spaces, hyphens, apostrophes and periods"
                    .to_string()
            }
            (NameInvalidCharacters, Arabic) => {
                "الاسم يجب أن يحتوي على حروف ومسافات وشرطات وفواصل عليا ونقاط فقط".to_string()
            }

            (Underage { min_age }, English) => {
                format!("You must be at least {} years old", min_age)
            }
            (Underage { min_age }, Arabic) => {
                format!("يجب أن يكون عمرك {} سنة على الأقل", min_age)
            }

            (InvalidDate, English) => "Please enter a valid date".to_string(),
            (InvalidDate, Arabic) => "يرجى إدخال تاريخ صحيح".to_string(),
        }
    }
}
