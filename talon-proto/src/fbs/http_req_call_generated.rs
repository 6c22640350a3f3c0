// automatically generated by the FlatBuffers compiler, do not modify
// @generated

#[allow(unused_imports, dead_code)]
pub mod http_req_call {

    use crate::fbs::common_generated::common;
    use core::cmp::Ordering;
    use core::mem;

    extern crate flatbuffers;
    use self::flatbuffers::{EndianScalar, Follow};

    #[allow(non_camel_case_types)]
    #[repr(transparent)]
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Method(pub u8);
    #[allow(non_upper_case_globals)]
    impl Method {
        pub const GET: Self = Self(0);
        pub const HEAD: Self = Self(1);
        pub const POST: Self = Self(2);
        pub const PUT: Self = Self(3);
        pub const DELETE: Self = Self(4);
        pub const MKCOL: Self = Self(5);
        pub const COPY: Self = Self(6);
        pub const MOVE: Self = Self(7);
        pub const OPTIONS: Self = Self(8);
        pub const PROPFIND: Self = Self(9);
        pub const PROPPATCH: Self = Self(10);
        pub const LOCK: Self = Self(11);
        pub const UNLOCK: Self = Self(12);
        pub const PATCH: Self = Self(13);
        pub const TRACE: Self = Self(14);

        pub const ENUM_MIN: u8 = 0;
        pub const ENUM_MAX: u8 = 14;
        pub const ENUM_VALUES: &'static [Self] = &[
            Self::GET,
            Self::HEAD,
            Self::POST,
            Self::PUT,
            Self::DELETE,
            Self::MKCOL,
            Self::COPY,
            Self::MOVE,
            Self::OPTIONS,
            Self::PROPFIND,
            Self::PROPPATCH,
            Self::LOCK,
            Self::UNLOCK,
            Self::PATCH,
            Self::TRACE,
        ];
        /// Returns the variant's name or "" if unknown.
        pub fn variant_name(self) -> Option<&'static str> {
            match self {
                Self::GET => Some("GET"),
                Self::HEAD => Some("HEAD"),
                Self::POST => Some("POST"),
                Self::PUT => Some("PUT"),
                Self::DELETE => Some("DELETE"),
                Self::MKCOL => Some("MKCOL"),
                Self::COPY => Some("COPY"),
                Self::MOVE => Some("MOVE"),
                Self::OPTIONS => Some("OPTIONS"),
                Self::PROPFIND => Some("PROPFIND"),
                Self::PROPPATCH => Some("PROPPATCH"),
                Self::LOCK => Some("LOCK"),
                Self::UNLOCK => Some("UNLOCK"),
                Self::PATCH => Some("PATCH"),
                Self::TRACE => Some("TRACE"),
                _ => None,
            }
        }
    }
    impl core::fmt::Debug for Method {
        fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
            if let Some(name) = self.variant_name() {
                f.write_str(name)
            } else {
                f.write_fmt(format_args!("<UNKNOWN {:?}>", self.0))
            }
        }
    }
    impl<'a> flatbuffers::Follow<'a> for Method {
        type Inner = Self;
        #[inline]
        unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
            let b = flatbuffers::read_scalar_at::<u8>(buf, loc);
            Self(b)
        }
    }

    impl flatbuffers::Push for Method {
        type Output = Method;
        #[inline]
        unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
            flatbuffers::emplace_scalar::<u8>(dst, self.0);
        }
    }

    impl flatbuffers::EndianScalar for Method {
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

    impl flatbuffers::Verifiable for Method {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            u8::run_verifier(v, pos)
        }
    }

    impl flatbuffers::SimpleToVerifyInSlice for Method {}

    #[allow(non_camel_case_types)]
    #[repr(transparent)]
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Action(pub u8);
    #[allow(non_upper_case_globals)]
    impl Action {
        pub const NONE: Self = Self(0);
        pub const Rewrite: Self = Self(1);
        pub const Stop: Self = Self(2);

        pub const ENUM_MIN: u8 = 0;
        pub const ENUM_MAX: u8 = 2;
        pub const ENUM_VALUES: &'static [Self] = &[Self::NONE, Self::Rewrite, Self::Stop];
        /// Returns the variant's name or "" if unknown.
        pub fn variant_name(self) -> Option<&'static str> {
            match self {
                Self::NONE => Some("NONE"),
                Self::Rewrite => Some("Rewrite"),
                Self::Stop => Some("Stop"),
                _ => None,
            }
        }
    }
    impl core::fmt::Debug for Action {
        fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
            if let Some(name) = self.variant_name() {
                f.write_str(name)
            } else {
                f.write_fmt(format_args!("<UNKNOWN {:?}>", self.0))
            }
        }
    }
    impl<'a> flatbuffers::Follow<'a> for Action {
        type Inner = Self;
        #[inline]
        unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
            let b = flatbuffers::read_scalar_at::<u8>(buf, loc);
            Self(b)
        }
    }

    impl flatbuffers::Push for Action {
        type Output = Action;
        #[inline]
        unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
            flatbuffers::emplace_scalar::<u8>(dst, self.0);
        }
    }

    impl flatbuffers::EndianScalar for Action {
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

    impl flatbuffers::Verifiable for Action {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            u8::run_verifier(v, pos)
        }
    }

    impl flatbuffers::SimpleToVerifyInSlice for Action {}

    pub struct ActionUnionTableOffset {}

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
        pub const VT_ID: flatbuffers::VOffsetT = 4;
        pub const VT_CONF_TOKEN: flatbuffers::VOffsetT = 6;
        pub const VT_SRC_IP: flatbuffers::VOffsetT = 8;
        pub const VT_METHOD: flatbuffers::VOffsetT = 10;
        pub const VT_PATH: flatbuffers::VOffsetT = 12;
        pub const VT_HEADERS: flatbuffers::VOffsetT = 14;
        pub const VT_ARGS: flatbuffers::VOffsetT = 16;

        #[inline]
        pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
            Req { _tab: table }
        }
        #[allow(unused_mut)]
        pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
            _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
            args: &'args ReqArgs<'args>,
        ) -> flatbuffers::WIPOffset<Req<'bldr>> {
            let mut builder = ReqBuilder::new(_fbb);
            if let Some(x) = args.args {
                builder.add_args(x);
            }
            if let Some(x) = args.headers {
                builder.add_headers(x);
            }
            if let Some(x) = args.path {
                builder.add_path(x);
            }
            if let Some(x) = args.src_ip {
                builder.add_src_ip(x);
            }
            builder.add_conf_token(args.conf_token);
            builder.add_id(args.id);
            builder.add_method(args.method);
            builder.finish()
        }

        #[inline]
        pub fn id(&self) -> u32 {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<u32>(Req::VT_ID, Some(0)).unwrap() }
        }
        #[inline]
        pub fn conf_token(&self) -> u32 {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<u32>(Req::VT_CONF_TOKEN, Some(0)).unwrap() }
        }
        #[inline]
        pub fn src_ip(&self) -> Option<flatbuffers::Vector<'a, u8>> {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe {
                self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, u8>>>(Req::VT_SRC_IP, None)
            }
        }
        #[inline]
        pub fn method(&self) -> Method {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<Method>(Req::VT_METHOD, Some(Method(0))).unwrap() }
        }
        #[inline]
        pub fn path(&self) -> Option<&'a str> {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(Req::VT_PATH, None) }
        }
        #[inline]
        pub fn headers(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>> {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe {
                self._tab
                    .get::<flatbuffers::ForwardsUOffset<
                        flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>,
                    >>(Req::VT_HEADERS, None)
            }
        }
        #[inline]
        pub fn args(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>> {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe {
                self._tab
                    .get::<flatbuffers::ForwardsUOffset<
                        flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>,
                    >>(Req::VT_ARGS, None)
            }
        }
    }

    impl flatbuffers::Verifiable for Req<'_> {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            v.visit_table(pos)?
                .visit_field::<u32>("id", Self::VT_ID, false)?
                .visit_field::<u32>("conf_token", Self::VT_CONF_TOKEN, false)?
                .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, u8>>>(
                    "src_ip",
                    Self::VT_SRC_IP,
                    false,
                )?
                .visit_field::<Method>("method", Self::VT_METHOD, false)?
                .visit_field::<flatbuffers::ForwardsUOffset<&str>>("path", Self::VT_PATH, false)?
                .visit_field::<flatbuffers::ForwardsUOffset<
                    flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<common::TextEntry>>,
                >>("headers", Self::VT_HEADERS, false)?
                .visit_field::<flatbuffers::ForwardsUOffset<
                    flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<common::TextEntry>>,
                >>("args", Self::VT_ARGS, false)?
                .finish();
            Ok(())
        }
    }

    pub struct ReqArgs<'a> {
        pub id: u32,
        pub conf_token: u32,
        pub src_ip: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, u8>>>,
        pub method: Method,
        pub path: Option<flatbuffers::WIPOffset<&'a str>>,
        pub headers: Option<
            flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>>,
        >,
        pub args: Option<
            flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>>,
        >,
    }
    impl<'a> Default for ReqArgs<'a> {
        #[inline]
        fn default() -> Self {
            ReqArgs {
                id: 0,
                conf_token: 0,
                src_ip: None,
                method: Method(0),
                path: None,
                headers: None,
                args: None,
            }
        }
    }

    pub struct ReqBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
        fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
        start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
    }
    impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> ReqBuilder<'a, 'b, A> {
        #[inline]
        pub fn add_id(&mut self, id: u32) {
            self.fbb_.push_slot::<u32>(Req::VT_ID, id, 0);
        }
        #[inline]
        pub fn add_conf_token(&mut self, conf_token: u32) {
            self.fbb_.push_slot::<u32>(Req::VT_CONF_TOKEN, conf_token, 0);
        }
        #[inline]
        pub fn add_src_ip(&mut self, src_ip: flatbuffers::WIPOffset<flatbuffers::Vector<'b, u8>>) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Req::VT_SRC_IP, src_ip);
        }
        #[inline]
        pub fn add_method(&mut self, method: Method) {
            self.fbb_.push_slot::<Method>(Req::VT_METHOD, method, Method(0));
        }
        #[inline]
        pub fn add_path(&mut self, path: flatbuffers::WIPOffset<&'b str>) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Req::VT_PATH, path);
        }
        #[inline]
        pub fn add_headers(
            &mut self,
            headers: flatbuffers::WIPOffset<
                flatbuffers::Vector<'b, flatbuffers::ForwardsUOffset<common::TextEntry<'b>>>,
            >,
        ) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Req::VT_HEADERS, headers);
        }
        #[inline]
        pub fn add_args(
            &mut self,
            args: flatbuffers::WIPOffset<flatbuffers::Vector<'b, flatbuffers::ForwardsUOffset<common::TextEntry<'b>>>>,
        ) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Req::VT_ARGS, args);
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
            ds.field("id", &self.id());
            ds.field("conf_token", &self.conf_token());
            ds.field("src_ip", &self.src_ip());
            ds.field("method", &self.method());
            ds.field("path", &self.path());
            ds.field("headers", &self.headers());
            ds.field("args", &self.args());
            ds.finish()
        }
    }

    pub enum RewriteOffset {}
    #[derive(Copy, Clone, PartialEq)]

    pub struct Rewrite<'a> {
        pub _tab: flatbuffers::Table<'a>,
    }

    impl<'a> flatbuffers::Follow<'a> for Rewrite<'a> {
        type Inner = Rewrite<'a>;
        #[inline]
        unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
            Self { _tab: flatbuffers::Table::new(buf, loc) }
        }
    }

    impl<'a> Rewrite<'a> {
        pub const VT_PATH: flatbuffers::VOffsetT = 4;
        pub const VT_HEADERS: flatbuffers::VOffsetT = 6;
        pub const VT_ARGS: flatbuffers::VOffsetT = 8;
        pub const VT_RESP_HEADERS: flatbuffers::VOffsetT = 10;

        #[inline]
        pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
            Rewrite { _tab: table }
        }
        #[allow(unused_mut)]
        pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
            _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
            args: &'args RewriteArgs<'args>,
        ) -> flatbuffers::WIPOffset<Rewrite<'bldr>> {
            let mut builder = RewriteBuilder::new(_fbb);
            if let Some(x) = args.resp_headers {
                builder.add_resp_headers(x);
            }
            if let Some(x) = args.args {
                builder.add_args(x);
            }
            if let Some(x) = args.headers {
                builder.add_headers(x);
            }
            if let Some(x) = args.path {
                builder.add_path(x);
            }
            builder.finish()
        }

        #[inline]
        pub fn path(&self) -> Option<&'a str> {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(Rewrite::VT_PATH, None) }
        }
        #[inline]
        pub fn headers(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>> {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe {
                self._tab
                    .get::<flatbuffers::ForwardsUOffset<
                        flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>,
                    >>(Rewrite::VT_HEADERS, None)
            }
        }
        #[inline]
        pub fn args(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>> {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe {
                self._tab
                    .get::<flatbuffers::ForwardsUOffset<
                        flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>,
                    >>(Rewrite::VT_ARGS, None)
            }
        }
        #[inline]
        pub fn resp_headers(
            &self,
        ) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>> {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe {
                self._tab
                    .get::<flatbuffers::ForwardsUOffset<
                        flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>,
                    >>(Rewrite::VT_RESP_HEADERS, None)
            }
        }
    }

    impl flatbuffers::Verifiable for Rewrite<'_> {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            v.visit_table(pos)?
                .visit_field::<flatbuffers::ForwardsUOffset<&str>>("path", Self::VT_PATH, false)?
                .visit_field::<flatbuffers::ForwardsUOffset<
                    flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<common::TextEntry>>,
                >>("headers", Self::VT_HEADERS, false)?
                .visit_field::<flatbuffers::ForwardsUOffset<
                    flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<common::TextEntry>>,
                >>("args", Self::VT_ARGS, false)?
                .visit_field::<flatbuffers::ForwardsUOffset<
                    flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<common::TextEntry>>,
                >>("resp_headers", Self::VT_RESP_HEADERS, false)?
                .finish();
            Ok(())
        }
    }

    pub struct RewriteArgs<'a> {
        pub path: Option<flatbuffers::WIPOffset<&'a str>>,
        pub headers: Option<
            flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>>,
        >,
        pub args: Option<
            flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>>,
        >,
        pub resp_headers: Option<
            flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>>,
        >,
    }
    impl<'a> Default for RewriteArgs<'a> {
        #[inline]
        fn default() -> Self {
            RewriteArgs { path: None, headers: None, args: None, resp_headers: None }
        }
    }

    pub struct RewriteBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
        fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
        start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
    }
    impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> RewriteBuilder<'a, 'b, A> {
        #[inline]
        pub fn add_path(&mut self, path: flatbuffers::WIPOffset<&'b str>) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Rewrite::VT_PATH, path);
        }
        #[inline]
        pub fn add_headers(
            &mut self,
            headers: flatbuffers::WIPOffset<
                flatbuffers::Vector<'b, flatbuffers::ForwardsUOffset<common::TextEntry<'b>>>,
            >,
        ) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Rewrite::VT_HEADERS, headers);
        }
        #[inline]
        pub fn add_args(
            &mut self,
            args: flatbuffers::WIPOffset<flatbuffers::Vector<'b, flatbuffers::ForwardsUOffset<common::TextEntry<'b>>>>,
        ) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Rewrite::VT_ARGS, args);
        }
        #[inline]
        pub fn add_resp_headers(
            &mut self,
            resp_headers: flatbuffers::WIPOffset<
                flatbuffers::Vector<'b, flatbuffers::ForwardsUOffset<common::TextEntry<'b>>>,
            >,
        ) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Rewrite::VT_RESP_HEADERS, resp_headers);
        }
        #[inline]
        pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> RewriteBuilder<'a, 'b, A> {
            let start = _fbb.start_table();
            RewriteBuilder { fbb_: _fbb, start_: start }
        }
        #[inline]
        pub fn finish(self) -> flatbuffers::WIPOffset<Rewrite<'a>> {
            let o = self.fbb_.end_table(self.start_);
            flatbuffers::WIPOffset::new(o.value())
        }
    }

    impl core::fmt::Debug for Rewrite<'_> {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            let mut ds = f.debug_struct("Rewrite");
            ds.field("path", &self.path());
            ds.field("headers", &self.headers());
            ds.field("args", &self.args());
            ds.field("resp_headers", &self.resp_headers());
            ds.finish()
        }
    }

    pub enum StopOffset {}
    #[derive(Copy, Clone, PartialEq)]

    pub struct Stop<'a> {
        pub _tab: flatbuffers::Table<'a>,
    }

    impl<'a> flatbuffers::Follow<'a> for Stop<'a> {
        type Inner = Stop<'a>;
        #[inline]
        unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
            Self { _tab: flatbuffers::Table::new(buf, loc) }
        }
    }

    impl<'a> Stop<'a> {
        pub const VT_STATUS: flatbuffers::VOffsetT = 4;
        pub const VT_HEADERS: flatbuffers::VOffsetT = 6;
        pub const VT_BODY: flatbuffers::VOffsetT = 8;

        #[inline]
        pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
            Stop { _tab: table }
        }
        #[allow(unused_mut)]
        pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
            _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
            args: &'args StopArgs<'args>,
        ) -> flatbuffers::WIPOffset<Stop<'bldr>> {
            let mut builder = StopBuilder::new(_fbb);
            if let Some(x) = args.body {
                builder.add_body(x);
            }
            if let Some(x) = args.headers {
                builder.add_headers(x);
            }
            builder.add_status(args.status);
            builder.finish()
        }

        #[inline]
        pub fn status(&self) -> u16 {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<u16>(Stop::VT_STATUS, Some(0)).unwrap() }
        }
        #[inline]
        pub fn headers(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>> {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe {
                self._tab
                    .get::<flatbuffers::ForwardsUOffset<
                        flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>,
                    >>(Stop::VT_HEADERS, None)
            }
        }
        #[inline]
        pub fn body(&self) -> Option<flatbuffers::Vector<'a, u8>> {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, u8>>>(Stop::VT_BODY, None) }
        }
    }

    impl flatbuffers::Verifiable for Stop<'_> {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            v.visit_table(pos)?
                .visit_field::<u16>("status", Self::VT_STATUS, false)?
                .visit_field::<flatbuffers::ForwardsUOffset<
                    flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<common::TextEntry>>,
                >>("headers", Self::VT_HEADERS, false)?
                .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, u8>>>("body", Self::VT_BODY, false)?
                .finish();
            Ok(())
        }
    }

    pub struct StopArgs<'a> {
        pub status: u16,
        pub headers: Option<
            flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>>,
        >,
        pub body: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, u8>>>,
    }
    impl<'a> Default for StopArgs<'a> {
        #[inline]
        fn default() -> Self {
            StopArgs { status: 0, headers: None, body: None }
        }
    }

    pub struct StopBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
        fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
        start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
    }
    impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> StopBuilder<'a, 'b, A> {
        #[inline]
        pub fn add_status(&mut self, status: u16) {
            self.fbb_.push_slot::<u16>(Stop::VT_STATUS, status, 0);
        }
        #[inline]
        pub fn add_headers(
            &mut self,
            headers: flatbuffers::WIPOffset<
                flatbuffers::Vector<'b, flatbuffers::ForwardsUOffset<common::TextEntry<'b>>>,
            >,
        ) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Stop::VT_HEADERS, headers);
        }
        #[inline]
        pub fn add_body(&mut self, body: flatbuffers::WIPOffset<flatbuffers::Vector<'b, u8>>) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Stop::VT_BODY, body);
        }
        #[inline]
        pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> StopBuilder<'a, 'b, A> {
            let start = _fbb.start_table();
            StopBuilder { fbb_: _fbb, start_: start }
        }
        #[inline]
        pub fn finish(self) -> flatbuffers::WIPOffset<Stop<'a>> {
            let o = self.fbb_.end_table(self.start_);
            flatbuffers::WIPOffset::new(o.value())
        }
    }

    impl core::fmt::Debug for Stop<'_> {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            let mut ds = f.debug_struct("Stop");
            ds.field("status", &self.status());
            ds.field("headers", &self.headers());
            ds.field("body", &self.body());
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
        pub const VT_ID: flatbuffers::VOffsetT = 4;
        pub const VT_ACTION_TYPE: flatbuffers::VOffsetT = 6;
        pub const VT_ACTION: flatbuffers::VOffsetT = 8;

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
            if let Some(x) = args.action {
                builder.add_action(x);
            }
            builder.add_id(args.id);
            builder.add_action_type(args.action_type);
            builder.finish()
        }

        #[inline]
        pub fn id(&self) -> u32 {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<u32>(Resp::VT_ID, Some(0)).unwrap() }
        }
        #[inline]
        pub fn action_type(&self) -> Action {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<Action>(Resp::VT_ACTION_TYPE, Some(Action::NONE)).unwrap() }
        }
        #[inline]
        pub fn action(&self) -> Option<flatbuffers::Table<'a>> {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Table<'a>>>(Resp::VT_ACTION, None) }
        }
        #[inline]
        #[allow(non_snake_case)]
        pub fn action_as_rewrite(&self) -> Option<Rewrite<'a>> {
            if self.action_type() == Action::Rewrite {
                self.action().map(|t| {
                    // Safety:
                    // Created from a valid Table for this object
                    // Which contains a valid union in this slot
                    unsafe { Rewrite::init_from_table(t) }
                })
            } else {
                None
            }
        }
        #[inline]
        #[allow(non_snake_case)]
        pub fn action_as_stop(&self) -> Option<Stop<'a>> {
            if self.action_type() == Action::Stop {
                self.action().map(|t| {
                    // Safety:
                    // Created from a valid Table for this object
                    // Which contains a valid union in this slot
                    unsafe { Stop::init_from_table(t) }
                })
            } else {
                None
            }
        }
    }

    impl flatbuffers::Verifiable for Resp<'_> {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            v.visit_table(pos)?
                .visit_field::<u32>("id", Self::VT_ID, false)?
                .visit_union::<Action, _>(
                    "action_type",
                    Self::VT_ACTION_TYPE,
                    "action",
                    Self::VT_ACTION,
                    false,
                    |key, v, pos| match key {
                        Action::Rewrite => {
                            v.verify_union_variant::<flatbuffers::ForwardsUOffset<Rewrite>>("Action::Rewrite", pos)
                        },
                        Action::Stop => {
                            v.verify_union_variant::<flatbuffers::ForwardsUOffset<Stop>>("Action::Stop", pos)
                        },
                        _ => Ok(()),
                    },
                )?
                .finish();
            Ok(())
        }
    }

    pub struct RespArgs {
        pub id: u32,
        pub action_type: Action,
        pub action: Option<flatbuffers::WIPOffset<flatbuffers::UnionWIPOffset>>,
    }
    impl Default for RespArgs {
        #[inline]
        fn default() -> Self {
            RespArgs { id: 0, action_type: Action::NONE, action: None }
        }
    }

    pub struct RespBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
        fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
        start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
    }
    impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> RespBuilder<'a, 'b, A> {
        #[inline]
        pub fn add_id(&mut self, id: u32) {
            self.fbb_.push_slot::<u32>(Resp::VT_ID, id, 0);
        }
        #[inline]
        pub fn add_action_type(&mut self, action_type: Action) {
            self.fbb_.push_slot::<Action>(Resp::VT_ACTION_TYPE, action_type, Action::NONE);
        }
        #[inline]
        pub fn add_action(&mut self, action: flatbuffers::WIPOffset<flatbuffers::UnionWIPOffset>) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Resp::VT_ACTION, action);
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
            ds.field("id", &self.id());
            ds.field("action_type", &self.action_type());
            match self.action_type() {
                Action::Rewrite => {
                    if let Some(x) = self.action_as_rewrite() {
                        ds.field("action", &x)
                    } else {
                        ds.field("action", &"InvalidFlatbuffer: Union discriminant does not match value.")
                    }
                },
                Action::Stop => {
                    if let Some(x) = self.action_as_stop() {
                        ds.field("action", &x)
                    } else {
                        ds.field("action", &"InvalidFlatbuffer: Union discriminant does not match value.")
                    }
                },
                _ => {
                    let x: Option<()> = None;
                    ds.field("action", &x)
                },
            };
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
} // pub mod http_req_call
