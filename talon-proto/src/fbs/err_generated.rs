// automatically generated by the FlatBuffers compiler, do not modify
// @generated

#[allow(unused_imports, dead_code)]
pub mod err {

    use core::cmp::Ordering;
    use core::mem;

    extern crate flatbuffers;
    use self::flatbuffers::{EndianScalar, Follow};

    #[allow(non_camel_case_types)]
    #[repr(transparent)]
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Code(pub u32);
    #[allow(non_upper_case_globals)]
    impl Code {
        pub const BAD_REQUEST: Self = Self(1);
        pub const SERVICE_UNAVAILABLE: Self = Self(2);
        pub const CONF_TOKEN_NOT_FOUND: Self = Self(3);

        pub const ENUM_MIN: u32 = 1;
        pub const ENUM_MAX: u32 = 3;
        pub const ENUM_VALUES: &'static [Self] = &[Self::BAD_REQUEST, Self::SERVICE_UNAVAILABLE, Self::CONF_TOKEN_NOT_FOUND];
        /// Returns the variant's name or "" if unknown.
        pub fn variant_name(self) -> Option<&'static str> {
            match self {
                Self::BAD_REQUEST => Some("BAD_REQUEST"),
                Self::SERVICE_UNAVAILABLE => Some("SERVICE_UNAVAILABLE"),
                Self::CONF_TOKEN_NOT_FOUND => Some("CONF_TOKEN_NOT_FOUND"),
                _ => None,
            }
        }
    }
    impl core::fmt::Debug for Code {
        fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
            if let Some(name) = self.variant_name() {
                f.write_str(name)
            } else {
                f.write_fmt(format_args!("<UNKNOWN {:?}>", self.0))
            }
        }
    }
    impl<'a> flatbuffers::Follow<'a> for Code {
        type Inner = Self;
        #[inline]
        unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
            let b = flatbuffers::read_scalar_at::<u32>(buf, loc);
            Self(b)
        }
    }

    impl flatbuffers::Push for Code {
        type Output = Code;
        #[inline]
        unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
            flatbuffers::emplace_scalar::<u32>(dst, self.0);
        }
    }

    impl flatbuffers::EndianScalar for Code {
        type Scalar = u32;
        #[inline]
        fn to_little_endian(self) -> u32 {
            self.0.to_le()
        }
        #[inline]
        #[allow(clippy::wrong_self_convention)]
        fn from_little_endian(v: u32) -> Self {
            Self(u32::from_le(v))
        }
    }

    impl flatbuffers::Verifiable for Code {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            u32::run_verifier(v, pos)
        }
    }

    impl flatbuffers::SimpleToVerifyInSlice for Code {}

    pub enum RespOffset {}
    #[derive(Copy, Clone, PartialEq)]

    pub struct Resp<'a> {
        pub _tab: flatbuffers::Table<'a>,
    }

    impl<'a> flatbuffers::Follow<'a> for Resp<'a> {
        type Inner = Resp<'a>;
        #[inline]
        unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
            Self { _tab: flatbuffers::Table::new(buf, loc) }
        }
    }

    impl<'a> Resp<'a> {
        pub const VT_CODE: flatbuffers::VOffsetT = 4;

        #[inline]
        pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
            Resp { _tab: table }
        }
        #[allow(unused_mut)]
        pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
            _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
            args: &'args RespArgs,
        ) -> flatbuffers::WIPOffset<Resp<'bldr>> {
            let mut builder = RespBuilder::new(_fbb);
            builder.add_code(args.code);
            builder.finish()
        }

        #[inline]
        pub fn code(&self) -> Code {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<Code>(Resp::VT_CODE, Some(Code(0))).unwrap() }
        }
    }

    impl flatbuffers::Verifiable for Resp<'_> {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            v.visit_table(pos)?.visit_field::<Code>("code", Self::VT_CODE, false)?.finish();
            Ok(())
        }
    }

    pub struct RespArgs {
        pub code: Code,
    }
    impl Default for RespArgs {
        #[inline]
        fn default() -> Self {
            RespArgs { code: Code(0) }
        }
    }

    pub struct RespBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
        fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
        start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
    }
    impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> RespBuilder<'a, 'b, A> {
        #[inline]
        pub fn add_code(&mut self, code: Code) {
            self.fbb_.push_slot::<Code>(Resp::VT_CODE, code, Code(0));
        }
        #[inline]
        pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> RespBuilder<'a, 'b, A> {
            let start = _fbb.start_table();
            RespBuilder { fbb_: _fbb, start_: start }
        }
        #[inline]
        pub fn finish(self) -> flatbuffers::WIPOffset<Resp<'a>> {
            let o = self.fbb_.end_table(self.start_);
            flatbuffers::WIPOffset::new(o.value())
        }
    }

    impl core::fmt::Debug for Resp<'_> {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            let mut ds = f.debug_struct("Resp");
            ds.field("code", &self.code());
            ds.finish()
        }
    }

    #[inline]
    /// Verifies that a buffer of bytes contains a `Resp`
    /// and returns it.
    pub fn root_as_resp(buf: &[u8]) -> Result<Resp, flatbuffers::InvalidFlatbuffer> {
        flatbuffers::root::<Resp>(buf)
    }
    #[inline]
    /// Assumes, without verification, that a buffer of bytes contains a Resp and returns it.
    /// # Safety
    /// Callers must trust the given bytes do indeed contain a valid `Resp`.
    pub unsafe fn root_as_resp_unchecked(buf: &[u8]) -> Resp {
        flatbuffers::root_unchecked::<Resp>(buf)
    }
} // pub mod err
