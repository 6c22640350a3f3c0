// automatically generated by the FlatBuffers compiler, do not modify
// @generated

#[allow(unused_imports, dead_code)]
pub mod prepare_conf {

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
        pub const VT_CONF: flatbuffers::VOffsetT = 4;
        pub const VT_KEY: flatbuffers::VOffsetT = 6;

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
            if let Some(x) = args.key {
                builder.add_key(x);
            }
            if let Some(x) = args.conf {
                builder.add_conf(x);
            }
            builder.finish()
        }

        #[inline]
        pub fn conf(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>> {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe {
                self._tab
                    .get::<flatbuffers::ForwardsUOffset<
                        flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>,
                    >>(Req::VT_CONF, None)
            }
        }
        #[inline]
        pub fn key(&self) -> Option<&'a str> {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(Req::VT_KEY, None) }
        }
    }

    impl flatbuffers::Verifiable for Req<'_> {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            v.visit_table(pos)?
                .visit_field::<flatbuffers::ForwardsUOffset<
                    flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<common::TextEntry>>,
                >>("conf", Self::VT_CONF, false)?
                .visit_field::<flatbuffers::ForwardsUOffset<&str>>("key", Self::VT_KEY, false)?
                .finish();
            Ok(())
        }
    }

    pub struct ReqArgs<'a> {
        pub conf: Option<
            flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<common::TextEntry<'a>>>>,
        >,
        pub key: Option<flatbuffers::WIPOffset<&'a str>>,
    }
    impl<'a> Default for ReqArgs<'a> {
        #[inline]
        fn default() -> Self {
            ReqArgs { conf: None, key: None }
        }
    }

    pub struct ReqBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
        fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
        start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
    }
    impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> ReqBuilder<'a, 'b, A> {
        #[inline]
        pub fn add_conf(
            &mut self,
            conf: flatbuffers::WIPOffset<flatbuffers::Vector<'b, flatbuffers::ForwardsUOffset<common::TextEntry<'b>>>>,
        ) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Req::VT_CONF, conf);
        }
        #[inline]
        pub fn add_key(&mut self, key: flatbuffers::WIPOffset<&'b str>) {
            self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Req::VT_KEY, key);
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
            ds.field("conf", &self.conf());
            ds.field("key", &self.key());
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
        pub const VT_CONF_TOKEN: flatbuffers::VOffsetT = 4;

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
            builder.add_conf_token(args.conf_token);
            builder.finish()
        }

        #[inline]
        pub fn conf_token(&self) -> u32 {
            // Safety:
            // Created from valid Table for this object
            // which contains a valid value in this slot
            unsafe { self._tab.get::<u32>(Resp::VT_CONF_TOKEN, Some(0)).unwrap() }
        }
    }

    impl flatbuffers::Verifiable for Resp<'_> {
        #[inline]
        fn run_verifier(v: &mut flatbuffers::Verifier, pos: usize) -> Result<(), flatbuffers::InvalidFlatbuffer> {
            use self::flatbuffers::Verifiable;
            v.visit_table(pos)?.visit_field::<u32>("conf_token", Self::VT_CONF_TOKEN, false)?.finish();
            Ok(())
        }
    }

    pub struct RespArgs {
        pub conf_token: u32,
    }
    impl Default for RespArgs {
        #[inline]
        fn default() -> Self {
            RespArgs { conf_token: 0 }
        }
    }

    pub struct RespBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
        fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
        start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
    }
    impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> RespBuilder<'a, 'b, A> {
        #[inline]
        pub fn add_conf_token(&mut self, conf_token: u32) {
            self.fbb_.push_slot::<u32>(Resp::VT_CONF_TOKEN, conf_token, 0);
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
            ds.field("conf_token", &self.conf_token());
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
} // pub mod prepare_conf
