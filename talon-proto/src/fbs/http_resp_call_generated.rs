// automatically generated by the FlatBuffers compiler, do not modify
// @generated

#[allow(unused_imports, dead_code)]
pub mod http_resp_call {

    use crate::fbs::common_generated::common;
    use core::cmp::Ordering;
    use core::mem;

    extern crate flatbuffers;
    use self::flatbuffers::{EndianScalar, Follow};

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
        pub const VT_STATUS: flatbuffers::VOffsetT = 8;
        pub const VT_HEADERS: flatbuffers::VOffsetT = 10;

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
            if let Some(x) = args.headers {
                builder.add_headers(x);
            }
            builder.add_conf_token(args.conf_token);
            builder.add_id(args.id);
            builder.add_status(args.status);
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
        pub fn status(&self) -> u16 {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<u16>(Req::VT_STATUS, Some(0)).unwrap() }
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
    }

    impl flatbuffers::Verifiable for Req<'_> {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            v.visit_table(pos)?
                .visit_field::<u32>("id", Self::VT_ID, false)?
                .visit_field::<u32>("conf_token", Self::VT_CONF_TOKEN, false)?
                .visit_field::<u16>("status", Self::VT_STATUS, false)?
                .visit_field::<flatbuffers::ForwardsUOffset<
                    flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<common::TextEntry>>,
                >>("headers", Self::VT_HEADERS, false)?
                .finish();
            Ok(())
        }
    }

    pub struct ReqArgs<'a> {
        pub id: u32,
        pub conf_token: u32,
        pub status: u16,
        pub headers: Option<
            flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>>,
        >,
    }
    impl<'a> Default for ReqArgs<'a> {
        #[inline]
        fn default() -> Self {
            ReqArgs { id: 0, conf_token: 0, status: 0, headers: None }
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
        pub fn add_status(&mut self, status: u16) {
            self.fbb_.push_slot::<u16>(Req::VT_STATUS, status, 0);
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
            ds.field("status", &self.status());
            ds.field("headers", &self.headers());
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
        pub const VT_STATUS: flatbuffers::VOffsetT = 6;
        pub const VT_HEADERS: flatbuffers::VOffsetT = 8;
        pub const VT_BODY: flatbuffers::VOffsetT = 10;

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
            if let Some(x) = args.body {
                builder.add_body(x);
            }
            if let Some(x) = args.headers {
                builder.add_headers(x);
            }
            builder.add_id(args.id);
            builder.add_status(args.status);
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
        pub fn status(&self) -> u16 {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<u16>(Resp::VT_STATUS, Some(0)).unwrap() }
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
                    >>(Resp::VT_HEADERS, None)
            }
        }
        #[inline]
        pub fn body(&self) -> Option<flatbuffers::Vector<'a, u8>> {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, u8>>>(Resp::VT_BODY, None) }
        }
    }

    impl flatbuffers::Verifiable for Resp<'_> {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            v.visit_table(pos)?
                .visit_field::<u32>("id", Self::VT_ID, false)?
                .visit_field::<u16>("status", Self::VT_STATUS, false)?
                .visit_field::<flatbuffers::ForwardsUOffset<
                    flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<common::TextEntry>>,
                >>("headers", Self::VT_HEADERS, false)?
                .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, u8>>>("body", Self::VT_BODY, false)?
                .finish();
            Ok(())
        }
    }

    pub struct RespArgs<'a> {
        pub id: u32,
        pub status: u16,
        pub headers: Option<
            flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>>,
        >,
        pub body: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, u8>>>,
    }
    impl<'a> Default for RespArgs<'a> {
        #[inline]
        fn default() -> Self {
            RespArgs { id: 0, status: 0, headers: None, body: None }
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
        pub fn add_status(&mut self, status: u16) {
            self.fbb_.push_slot::<u16>(Resp::VT_STATUS, status, 0);
        }
        #[inline]
        pub fn add_headers(
            &mut self,
            headers: flatbuffers::WIPOffset<
                flatbuffers::Vector<'b, flatbuffers::ForwardsUOffset<common::TextEntry<'b>>>,
            >,
        ) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Resp::VT_HEADERS, headers);
        }
        #[inline]
        pub fn add_body(&mut self, body: flatbuffers::WIPOffset<flatbuffers::Vector<'b, u8>>) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Resp::VT_BODY, body);
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
            ds.field("status", &self.status());
            ds.field("headers", &self.headers());
            ds.field("body", &self.body());
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
} // pub mod http_resp_call
