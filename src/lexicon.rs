use std::collections::HashMap;

/// Built-in English -> Arabic phrase table for the notification-template
/// domain. Declaration order is load-bearing: the case-insensitive fallback
/// scan walks the table top to bottom and the first hit wins.
const BUILTIN_TERMS: &[(&str, &str)] = &[
    ("Hello", "مرحبا"),
    ("Hi", "أهلا"),
    ("Welcome", "أهلا وسهلا"),
    ("Good Morning", "صباح الخير"),
    ("Good Evening", "مساء الخير"),
    ("Thank You", "شكرا لك"),
    ("Thanks", "شكرا"),
    ("Dear Customer", "عزيزي العميل"),
    ("Dear User", "عزيزي المستخدم"),
    ("Customer", "العميل"),
    ("User", "المستخدم"),
    ("Best Regards", "مع أطيب التحيات"),
    ("Regards", "تحياتي"),
    ("Sincerely", "مع خالص التقدير"),
    ("Account", "الحساب"),
    ("Password", "كلمة المرور"),
    ("Username", "اسم المستخدم"),
    ("Email", "البريد الإلكتروني"),
    ("Email Address", "عنوان البريد الإلكتروني"),
    ("Phone Number", "رقم الهاتف"),
    ("Notification", "إشعار"),
    ("Notifications", "الإشعارات"),
    ("Message", "رسالة"),
    ("Messages", "الرسائل"),
    ("Settings", "الإعدادات"),
    ("Profile", "الملف الشخصي"),
    ("Invoice", "الفاتورة"),
    ("Payment", "الدفع"),
    ("Order", "الطلب"),
    ("Orders", "الطلبات"),
    ("Receipt", "الإيصال"),
    ("Subscription", "الاشتراك"),
    ("Confirm", "تأكيد"),
    ("Confirmation", "التأكيد"),
    ("Cancel", "إلغاء"),
    ("Submit", "إرسال"),
    ("Save", "حفظ"),
    ("Delete", "حذف"),
    ("Edit", "تعديل"),
    ("View", "عرض"),
    ("Search", "بحث"),
    ("Download", "تنزيل"),
    ("Upload", "رفع"),
    ("Login", "تسجيل الدخول"),
    ("Log In", "تسجيل الدخول"),
    ("Logout", "تسجيل الخروج"),
    ("Sign Up", "إنشاء حساب"),
    ("Reset Password", "إعادة تعيين كلمة المرور"),
    ("Forgot Password", "نسيت كلمة المرور"),
    ("Verify", "تحقق"),
    ("Verification Code", "رمز التحقق"),
    ("Error", "خطأ"),
    ("Success", "نجاح"),
    ("Warning", "تحذير"),
    ("Failed", "فشل"),
    ("Pending", "قيد الانتظار"),
    ("Completed", "مكتمل"),
    ("Approved", "تمت الموافقة"),
    ("Rejected", "مرفوض"),
    ("Active", "نشط"),
    ("Inactive", "غير نشط"),
    ("Expired", "منتهي الصلاحية"),
    ("New", "جديد"),
    ("Yes", "نعم"),
    ("No", "لا"),
    ("Next", "التالي"),
    ("Previous", "السابق"),
    ("Back", "رجوع"),
    ("Continue", "متابعة"),
    ("Close", "إغلاق"),
    ("Open", "فتح"),
    ("Help", "مساعدة"),
    ("Support", "الدعم"),
    ("Contact Us", "اتصل بنا"),
    ("About Us", "من نحن"),
    ("Home", "الرئيسية"),
    ("Dashboard", "لوحة التحكم"),
    ("Report", "تقرير"),
    ("Reports", "التقارير"),
    ("Date", "التاريخ"),
    ("Time", "الوقت"),
    ("Today", "اليوم"),
    ("Yesterday", "أمس"),
    ("Tomorrow", "غدا"),
    ("Name", "الاسم"),
    ("First Name", "الاسم الأول"),
    ("Last Name", "اسم العائلة"),
    ("Address", "العنوان"),
    ("City", "المدينة"),
    ("Country", "الدولة"),
    ("Language", "اللغة"),
    ("English", "الإنجليزية"),
    ("Arabic", "العربية"),
    ("Total", "الإجمالي"),
    ("Subtotal", "المجموع الفرعي"),
    ("Discount", "الخصم"),
    ("Tax", "الضريبة"),
    ("Amount", "المبلغ"),
    ("Price", "السعر"),
    ("Quantity", "الكمية"),
    ("Free", "مجاني"),
    ("Required", "مطلوب"),
    ("Optional", "اختياري"),
    ("Loading", "جار التحميل"),
    ("Please Wait", "يرجى الانتظار"),
    ("Please Try Again", "يرجى المحاولة مرة أخرى"),
    ("Your order has been shipped", "تم شحن طلبك"),
    ("Your order has been delivered", "تم توصيل طلبك"),
    ("Your payment was successful", "تمت عملية الدفع بنجاح"),
    ("Your account has been created", "تم إنشاء حسابك"),
    ("Your password has been changed", "تم تغيير كلمة المرور الخاصة بك"),
    ("Terms of Service", "شروط الخدمة"),
    ("Privacy Policy", "سياسة الخصوصية"),
    ("Unsubscribe", "إلغاء الاشتراك"),
];

/// Immutable English -> Arabic phrase mapping. Keeps entries in declaration
/// order so the case-insensitive scan has a stable tie-break, plus a derived
/// index for exact lookups.
pub struct Lexicon {
    entries: Vec<(String, String)>,
    exact: HashMap<String, usize>,
}

impl Lexicon {
    /// The built-in table alone.
    #[must_use]
    pub fn builtin() -> Self {
        Self::with_extra_terms(std::iter::empty())
    }

    /// Built-in table plus user-supplied terms. Extra terms go first, so they
    /// shadow built-ins in both the exact and the case-insensitive lookup.
    /// Later duplicates of an already-seen key are dropped.
    pub fn with_extra_terms(extra: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut entries: Vec<(String, String)> = Vec::with_capacity(BUILTIN_TERMS.len());
        let mut exact: HashMap<String, usize> = HashMap::with_capacity(BUILTIN_TERMS.len());

        let builtin = BUILTIN_TERMS
            .iter()
            .map(|(en, ar)| ((*en).to_string(), (*ar).to_string()));
        for (en, ar) in extra.into_iter().chain(builtin) {
            let en = en.trim().to_string();
            let ar = ar.trim().to_string();
            if en.is_empty() || ar.is_empty() || exact.contains_key(&en) {
                continue;
            }
            exact.insert(en.clone(), entries.len());
            entries.push((en, ar));
        }

        Self { entries, exact }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn lookup_exact(&self, text: &str) -> Option<&str> {
        self.exact
            .get(text)
            .map(|&i| self.entries[i].1.as_str())
    }

    /// Case-insensitive fallback scan, in entry order. First match wins.
    #[must_use]
    pub fn lookup_caseless(&self, text: &str) -> Option<&str> {
        let needle = text.to_lowercase();
        self.entries
            .iter()
            .find(|(en, _)| en.to_lowercase() == needle)
            .map(|(_, ar)| ar.as_str())
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::Lexicon;

    #[test]
    fn exact_lookup_hits_builtin_terms() {
        let lex = Lexicon::builtin();
        assert_eq!(lex.lookup_exact("Hello"), Some("مرحبا"));
        assert_eq!(lex.lookup_exact("Good Morning"), Some("صباح الخير"));
        assert_eq!(lex.lookup_exact("No such phrase"), None);
    }

    #[test]
    fn caseless_lookup_ignores_case() {
        let lex = Lexicon::builtin();
        assert_eq!(lex.lookup_caseless("good morning"), Some("صباح الخير"));
        assert_eq!(lex.lookup_caseless("RESET PASSWORD"), Some("إعادة تعيين كلمة المرور"));
        assert_eq!(lex.lookup_caseless("frobnicate"), None);
    }

    #[test]
    fn extra_terms_shadow_builtins() {
        let lex = Lexicon::with_extra_terms(vec![
            ("Hello".to_string(), "أهلين".to_string()),
            ("Frobnicate".to_string(), "تلاعب".to_string()),
        ]);
        assert_eq!(lex.lookup_exact("Hello"), Some("أهلين"));
        assert_eq!(lex.lookup_caseless("hello"), Some("أهلين"));
        assert_eq!(lex.lookup_exact("Frobnicate"), Some("تلاعب"));
        // Built-ins not shadowed stay reachable.
        assert_eq!(lex.lookup_exact("Welcome"), Some("أهلا وسهلا"));
    }

    #[test]
    fn blank_extra_terms_are_dropped() {
        let lex = Lexicon::with_extra_terms(vec![
            ("  ".to_string(), "x".to_string()),
            ("x".to_string(), String::new()),
        ]);
        assert_eq!(lex.len(), Lexicon::builtin().len());
    }
}
