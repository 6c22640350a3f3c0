// automatically generated by the FlatBuffers compiler, do not modify
// @generated

#[allow(unused_imports, dead_code)]
pub mod extra_info {

    use core::cmp::Ordering;
    use core::mem;

    extern crate flatbuffers;
    use self::flatbuffers::{EndianScalar, Follow};

    #[allow(non_camel_case_types)]
    #[repr(transparent)]
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Info(pub u8);
    #[allow(non_upper_case_globals)]
    impl Info {
        pub const NONE: Self = Self(0);
        pub const Var: Self = Self(1);
        pub const ReqBody: Self = Self(2);
        pub const RespBody: Self = Self(3);

        pub const ENUM_MIN: u8 = 0;
        pub const ENUM_MAX: u8 = 3;
        pub const ENUM_VALUES: &'static [Self] = &[Self::NONE, Self::Var, Self::ReqBody, Self::RespBody];
        /// Returns the variant's name or "" if unknown.
        pub fn variant_name(self) -> Option<&'static str> {
            match self {
                Self::NONE => Some("NONE"),
                Self::Var => Some("Var"),
                Self::ReqBody => Some("ReqBody"),
                Self::RespBody => Some("RespBody"),
                _ => None,
            }
        }
    }
    impl core::fmt::Debug for Info {
        fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
            if let Some(name) = self.variant_name() {
                f.write_str(name)
            } else {
                f.write_fmt(format_args!("<UNKNOWN {:?}>", self.0))
            }
        }
    }
    impl<'a> flatbuffers::Follow<'a> for Info {
        type Inner = Self;
        #[inline]
        unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
            let b = flatbuffers::read_scalar_at::<u8>(buf, loc);
            Self(b)
        }
    }

    impl flatbuffers::Push for Info {
        type Output = Info;
        #[inline]
        unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
            flatbuffers::emplace_scalar::<u8>(dst, self.0);
        }
    }

    impl flatbuffers::EndianScalar for Info {
        type Scalar = u8;
        #[inline]
        fn to_little_endian(self) -> u8 {
            self.0.to_le()
        }
        #[inline]
        #[allow(clippy::wrong_self_convention)]
        fn from_little_endian(v: u8) -> Self {
            Self(u8::from_le(v))
        }
    }

    impl flatbuffers::Verifiable for Info {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            u8::run_verifier(v, pos)
        }
    }

    impl flatbuffers::SimpleToVerifyInSlice for Info {}

    pub struct InfoUnionTableOffset {}

    pub enum VarOffset {}
    #[derive(Copy, Clone, PartialEq)]

    pub struct Var<'a> {
        pub _tab: flatbuffers::Table<'a>,
    }

    impl<'a> flatbuffers::Follow<'a> for Var<'a> {
        type Inner = Var<'a>;
        #[inline]
        unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
            Self { _tab: flatbuffers::Table::new(buf, loc) }
        }
    }

    impl<'a> Var<'a> {
        pub const VT_NAME: flatbuffers::VOffsetT = 4;

        #[inline]
        pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
            Var { _tab: table }
        }
        #[allow(unused_mut)]
        pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
            _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
            args: &'args VarArgs<'args>,
        ) -> flatbuffers::WIPOffset<Var<'bldr>> {
            let mut builder = VarBuilder::new(_fbb);
            if let Some(x) = args.name {
                builder.add_name(x);
            }
            builder.finish()
        }

        #[inline]
        pub fn name(&self) -> Option<&'a str> {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(Var::VT_NAME, None) }
        }
    }

    impl flatbuffers::Verifiable for Var<'_> {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            v.visit_table(pos)?
                .visit_field::<flatbuffers::ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
                .finish();
            Ok(())
        }
    }

    pub struct VarArgs<'a> {
        pub name: Option<flatbuffers::WIPOffset<&'a str>>,
    }
    impl<'a> Default for VarArgs<'a> {
        #[inline]
        fn default() -> Self {
            VarArgs { name: None }
        }
    }

    pub struct VarBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
        fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
        start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
    }
    impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> VarBuilder<'a, 'b, A> {
        #[inline]
        pub fn add_name(&mut self, name: flatbuffers::WIPOffset<&'b str>) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Var::VT_NAME, name);
        }
        #[inline]
        pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> VarBuilder<'a, 'b, A> {
            let start = _fbb.start_table();
            VarBuilder { fbb_: _fbb, start_: start }
        }
        #[inline]
        pub fn finish(self) -> flatbuffers::WIPOffset<Var<'a>> {
            let o = self.fbb_.end_table(self.start_);
            flatbuffers::WIPOffset::new(o.value())
        }
    }

    impl core::fmt::Debug for Var<'_> {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            let mut ds = f.debug_struct("Var");
            ds.field("name", &self.name());
            ds.finish()
        }
    }

    pub enum ReqBodyOffset {}
    #[derive(Copy, Clone, PartialEq)]

    pub struct ReqBody<'a> {
        pub _tab: flatbuffers::Table<'a>,
    }

    impl<'a> flatbuffers::Follow<'a> for ReqBody<'a> {
        type Inner = ReqBody<'a>;
        #[inline]
        unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
            Self { _tab: flatbuffers::Table::new(buf, loc) }
        }
    }

    impl<'a> ReqBody<'a> {
        #[inline]
        pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
            ReqBody { _tab: table }
        }
        #[allow(unused_mut)]
        pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
            _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
            _args: &'args ReqBodyArgs,
        ) -> flatbuffers::WIPOffset<ReqBody<'bldr>> {
            let mut builder = ReqBodyBuilder::new(_fbb);
            builder.finish()
        }
    }

    impl flatbuffers::Verifiable for ReqBody<'_> {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            v.visit_table(pos)?.finish();
            Ok(())
        }
    }

    pub struct ReqBodyArgs {}
    impl Default for ReqBodyArgs {
        #[inline]
        fn default() -> Self {
            ReqBodyArgs {}
        }
    }

    pub struct ReqBodyBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
        fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
        start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
    }
    impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> ReqBodyBuilder<'a, 'b, A> {
        #[inline]
        pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> ReqBodyBuilder<'a, 'b, A> {
            let start = _fbb.start_table();
            ReqBodyBuilder { fbb_: _fbb, start_: start }
        }
        #[inline]
        pub fn finish(self) -> flatbuffers::WIPOffset<ReqBody<'a>> {
            let o = self.fbb_.end_table(self.start_);
            flatbuffers::WIPOffset::new(o.value())
        }
    }

    impl core::fmt::Debug for ReqBody<'_> {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            let mut ds = f.debug_struct("ReqBody");
            ds.finish()
        }
    }

    pub enum RespBodyOffset {}
    #[derive(Copy, Clone, PartialEq)]

    pub struct RespBody<'a> {
        pub _tab: flatbuffers::Table<'a>,
    }

    impl<'a> flatbuffers::Follow<'a> for RespBody<'a> {
        type Inner = RespBody<'a>;
        #[inline]
        unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
            Self { _tab: flatbuffers::Table::new(buf, loc) }
        }
    }

    impl<'a> RespBody<'a> {
        #[inline]
        pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
            RespBody { _tab: table }
        }
        #[allow(unused_mut)]
        pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
            _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
            _args: &'args RespBodyArgs,
        ) -> flatbuffers::WIPOffset<RespBody<'bldr>> {
            let mut builder = RespBodyBuilder::new(_fbb);
            builder.finish()
        }
    }

    impl flatbuffers::Verifiable for RespBody<'_> {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            v.visit_table(pos)?.finish();
            Ok(())
        }
    }

    pub struct RespBodyArgs {}
    impl Default for RespBodyArgs {
        #[inline]
        fn default() -> Self {
            RespBodyArgs {}
        }
    }

    pub struct RespBodyBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
        fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
        start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
    }
    impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> RespBodyBuilder<'a, 'b, A> {
        #[inline]
        pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> RespBodyBuilder<'a, 'b, A> {
            let start = _fbb.start_table();
            RespBodyBuilder { fbb_: _fbb, start_: start }
        }
        #[inline]
        pub fn finish(self) -> flatbuffers::WIPOffset<RespBody<'a>> {
            let o = self.fbb_.end_table(self.start_);
            flatbuffers::WIPOffset::new(o.value())
        }
    }

    impl core::fmt::Debug for RespBody<'_> {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            let mut ds = f.debug_struct("RespBody");
            ds.finish()
        }
    }

    pub enum ReqOffset {}
    #[derive(Copy, Clone, PartialEq)]

    pub struct Req<'a> {
        pub _tab: flatbuffers::Table<'a>,
    }

    impl<'a> flatbuffers::Follow<'a> for Req<'a> {
        type Inner = Req<'a>;
        #[inline]
        unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
            Self { _tab: flatbuffers::Table::new(buf, loc) }
        }
    }

    impl<'a> Req<'a> {
        pub const VT_INFO_TYPE: flatbuffers::VOffsetT = 4;
        pub const VT_INFO: flatbuffers::VOffsetT = 6;

        #[inline]
        pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
            Req { _tab: table }
        }
        #[allow(unused_mut)]
        pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
            _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
            args: &'args ReqArgs,
        ) -> flatbuffers::WIPOffset<Req<'bldr>> {
            let mut builder = ReqBuilder::new(_fbb);
            if let Some(x) = args.info {
                builder.add_info(x);
            }
            builder.add_info_type(args.info_type);
            builder.finish()
        }

        #[inline]
        pub fn info_type(&self) -> Info {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<Info>(Req::VT_INFO_TYPE, Some(Info::NONE)).unwrap() }
        }
        #[inline]
        pub fn info(&self) -> Option<flatbuffers::Table<'a>> {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Table<'a>>>(Req::VT_INFO, None) }
        }
        #[inline]
        #[allow(non_snake_case)]
        pub fn info_as_var(&self) -> Option<Var<'a>> {
            if self.info_type() == Info::Var {
                self.info().map(|t| {
                    // Safety:
                    // Created from a valid Table for this object
                    // Which contains a valid union in this slot
                    unsafe { Var::init_from_table(t) }
                })
            } else {
                None
            }
        }
        #[inline]
        #[allow(non_snake_case)]
        pub fn info_as_req_body(&self) -> Option<ReqBody<'a>> {
            if self.info_type() == Info::ReqBody {
                self.info().map(|t| {
                    // Safety:
                    // Created from a valid Table for this object
                    // Which contains a valid union in this slot
                    unsafe { ReqBody::init_from_table(t) }
                })
            } else {
                None
            }
        }
        #[inline]
        #[allow(non_snake_case)]
        pub fn info_as_resp_body(&self) -> Option<RespBody<'a>> {
            if self.info_type() == Info::RespBody {
                self.info().map(|t| {
                    // Safety:
                    // Created from a valid Table for this object
                    // Which contains a valid union in this slot
                    unsafe { RespBody::init_from_table(t) }
                })
            } else {
                None
            }
        }
    }

    impl flatbuffers::Verifiable for Req<'_> {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            v.visit_table(pos)?
                .visit_union::<Info, _>(
                    "info_type",
                    Self::VT_INFO_TYPE,
                    "info",
                    Self::VT_INFO,
                    false,
                    |key, v, pos| match key {
                        Info::Var => v.verify_union_variant::<flatbuffers::ForwardsUOffset<Var>>("Info::Var", pos),
                        Info::ReqBody => {
                            v.verify_union_variant::<flatbuffers::ForwardsUOffset<ReqBody>>("Info::ReqBody", pos)
                        },
                        Info::RespBody => {
                            v.verify_union_variant::<flatbuffers::ForwardsUOffset<RespBody>>("Info::RespBody", pos)
                        },
                        _ => Ok(()),
                    },
                )?
                .finish();
            Ok(())
        }
    }

    pub struct ReqArgs {
        pub info_type: Info,
        pub info: Option<flatbuffers::WIPOffset<flatbuffers::UnionWIPOffset>>,
    }
    impl Default for ReqArgs {
        #[inline]
        fn default() -> Self {
            ReqArgs { info_type: Info::NONE, info: None }
        }
    }

    pub struct ReqBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
        fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
        start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
    }
    impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> ReqBuilder<'a, 'b, A> {
        #[inline]
        pub fn add_info_type(&mut self, info_type: Info) {
            self.fbb_.push_slot::<Info>(Req::VT_INFO_TYPE, info_type, Info::NONE);
        }
        #[inline]
        pub fn add_info(&mut self, info: flatbuffers::WIPOffset<flatbuffers::UnionWIPOffset>) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Req::VT_INFO, info);
        }
        #[inline]
        pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> ReqBuilder<'a, 'b, A> {
            let start = _fbb.start_table();
            ReqBuilder { fbb_: _fbb, start_: start }
        }
        #[inline]
        pub fn finish(self) -> flatbuffers::WIPOffset<Req<'a>> {
            let o = self.fbb_.end_table(self.start_);
            flatbuffers::WIPOffset::new(o.value())
        }
    }

    impl core::fmt::Debug for Req<'_> {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            let mut ds = f.debug_struct("Req");
            ds.field("info_type", &self.info_type());
            match self.info_type() {
                Info::Var => {
                    if let Some(x) = self.info_as_var() {
                        ds.field("info", &x)
                    } else {
                        ds.field("info", &"InvalidFlatbuffer: Union discriminant does not match value.")
                    }
                },
                Info::ReqBody => {
                    if let Some(x) = self.info_as_req_body() {
                        ds.field("info", &x)
                    } else {
                        ds.field("info", &"InvalidFlatbuffer: Union discriminant does not match value.")
                    }
                },
                Info::RespBody => {
                    if let Some(x) = self.info_as_resp_body() {
                        ds.field("info", &x)
                    } else {
                        ds.field("info", &"InvalidFlatbuffer: Union discriminant does not match value.")
                    }
                },
                _ => {
                    let x: Option<()> = None;
                    ds.field("info", &x)
                },
            };
            ds.finish()
        }
    }

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
        pub const VT_RESULT: flatbuffers::VOffsetT = 4;

        #[inline]
        pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
            Resp { _tab: table }
        }
        #[allow(unused_mut)]
        pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
            _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
            args: &'args RespArgs<'args>,
        ) -> flatbuffers::WIPOffset<Resp<'bldr>> {
            let mut builder = RespBuilder::new(_fbb);
            if let Some(x) = args.result {
                builder.add_result(x);
            }
            builder.finish()
        }

        #[inline]
        pub fn result(&self) -> Option<flatbuffers::Vector<'a, u8>> {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe {
                self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, u8>>>(Resp::VT_RESULT, None)
            }
        }
    }

    impl flatbuffers::Verifiable for Resp<'_> {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            v.visit_table(pos)?
                .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, u8>>>(
                    "result",
                    Self::VT_RESULT,
                    false,
                )?
                .finish();
            Ok(())
        }
    }

    pub struct RespArgs<'a> {
        pub result: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, u8>>>,
    }
    impl<'a> Default for RespArgs<'a> {
        #[inline]
        fn default() -> Self {
            RespArgs { result: None }
        }
    }

    pub struct RespBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
        fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
        start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
    }
    impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> RespBuilder<'a, 'b, A> {
        #[inline]
        pub fn add_result(&mut self, result: flatbuffers::WIPOffset<flatbuffers::Vector<'b, u8>>) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Resp::VT_RESULT, result);
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
            ds.field("result", &self.result());
            ds.finish()
        }
    }

    #[inline]
    /// Verifies that a buffer of bytes contains a `Req`
    /// and returns it.
    pub fn root_as_req(buf: &[u8]) -> Result<Req, flatbuffers::InvalidFlatbuffer> {
        flatbuffers::root::<Req>(buf)
    }
    #[inline]
    /// Verifies that a buffer of bytes contains a `Resp`
    /// and returns it.
    pub fn root_as_resp(buf: &[u8]) -> Result<Resp, flatbuffers::InvalidFlatbuffer> {
        flatbuffers::root::<Resp>(buf)
    }
} // pub mod extra_info
